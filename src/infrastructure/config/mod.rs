use crate::domain::voice::{AudioFormat, RequestOptions, TextType, VoiceId};
use crate::error::{VoiceError, VoiceResult};
use serde::Deserialize;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub voice_id: VoiceId,
    pub text_type: TextType,
    pub output_format: AudioFormat,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> VoiceResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            base_url: env::var("VOICE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            voice_id: parse_token("VOICE_ID", VoiceId::default(), VoiceId::from_token)?,
            text_type: parse_token("VOICE_TEXT_TYPE", TextType::default(), TextType::from_token)?,
            output_format: parse_token(
                "VOICE_OUTPUT_FORMAT",
                AudioFormat::default(),
                AudioFormat::from_token,
            )?,
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }

    /// Request options for `text` using the configured voice and formats
    pub fn default_options(&self, text: impl Into<String>) -> RequestOptions {
        RequestOptions::new(text)
            .with_text_type(self.text_type)
            .with_voice_id(self.voice_id)
            .with_output_format(self.output_format)
    }
}

/// Read an enum token from `key`, falling back to `default` when unset.
/// A set but unrecognized token is a configuration error.
fn parse_token<T>(key: &str, default: T, from_token: fn(&str) -> Option<T>) -> VoiceResult<T> {
    match env::var(key) {
        Ok(value) => from_token(value.trim()).ok_or_else(|| {
            VoiceError::Config(format!("{} has unsupported value '{}'", key, value))
        }),
        Err(_) => Ok(default),
    }
}
