use super::audio_format::AudioFormat;
use super::persisted::{
    PersistedOptions, OUTPUT_FORMAT_KEY, TEXT_KEY, TEXT_TYPE_KEY, VOICE_ID_KEY,
};
use super::text_type::TextType;
use super::voice_id::VoiceId;
use crate::error::{VoiceError, VoiceResult};
use std::fmt::Write;

/// Path of the speak endpoint, relative to the API host
pub const SPEAK_PATH_PREFIX: &str = "voice/v1/speak/";

/// Characters that must be percent-escaped when the text is placed in the
/// request path. Everything else, including non-ASCII, is left as-is.
const DISALLOWED_PATH_CHARACTERS: &str = "\\!*'();:@&=+$,/<>?%#[]\" ";

/// Options for a single speech synthesis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Text to create audio for. Either plain text or SSML; when SSML is
    /// provided `text_type` must be [`TextType::Ssml`].
    pub text: String,

    /// Type of text to synthesize. SSML text must be valid SSML for the
    /// request to work.
    pub text_type: TextType,

    /// Voice used to say the text. Voices are specific to a locale.
    pub voice_id: VoiceId,

    /// Audio format of the returned file
    pub output_format: AudioFormat,
}

impl RequestOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type: TextType::default(),
            voice_id: VoiceId::default(),
            output_format: AudioFormat::default(),
        }
    }

    pub fn with_text_type(mut self, text_type: TextType) -> Self {
        self.text_type = text_type;
        self
    }

    pub fn with_voice_id(mut self, voice_id: VoiceId) -> Self {
        self.voice_id = voice_id;
        self
    }

    pub fn with_output_format(mut self, output_format: AudioFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Rebuild options from their persisted form.
    ///
    /// A missing or non-string `text` becomes an empty string. Each enum key
    /// must hold a recognized token; if any of them does not, decoding fails
    /// as a whole and the error names every offending key.
    pub fn decode(persisted: &PersistedOptions) -> VoiceResult<Self> {
        let text = persisted.string(TEXT_KEY).unwrap_or_default().to_string();

        let text_type = TextType::from_token(persisted.string(TEXT_TYPE_KEY).unwrap_or_default());
        let output_format =
            AudioFormat::from_token(persisted.string(OUTPUT_FORMAT_KEY).unwrap_or_default());
        let voice_id = VoiceId::from_token(persisted.string(VOICE_ID_KEY).unwrap_or_default());

        match (text_type, output_format, voice_id) {
            (Some(text_type), Some(output_format), Some(voice_id)) => Ok(Self {
                text,
                text_type,
                voice_id,
                output_format,
            }),
            _ => {
                let mut fields = Vec::new();
                if text_type.is_none() {
                    fields.push(TEXT_TYPE_KEY);
                }
                if output_format.is_none() {
                    fields.push(OUTPUT_FORMAT_KEY);
                }
                if voice_id.is_none() {
                    fields.push(VOICE_ID_KEY);
                }

                tracing::warn!(
                    failed_fields = ?fields,
                    "Discarding persisted request options with unrecognized values"
                );

                Err(VoiceError::Decode { fields })
            }
        }
    }

    /// Persisted form of these options, readable by [`RequestOptions::decode`]
    pub fn encode(&self) -> PersistedOptions {
        let mut persisted = PersistedOptions::new();
        persisted.insert(TEXT_KEY, self.text.as_str());
        persisted.insert(TEXT_TYPE_KEY, self.text_type.as_str());
        persisted.insert(VOICE_ID_KEY, self.voice_id.as_str());
        persisted.insert(OUTPUT_FORMAT_KEY, self.output_format.as_str());
        persisted
    }

    pub fn to_json(&self) -> VoiceResult<String> {
        Ok(serde_json::to_string(&self.encode())?)
    }

    pub fn from_json(json: &str) -> VoiceResult<Self> {
        let persisted: PersistedOptions = serde_json::from_str(json)?;
        Self::decode(&persisted)
    }

    /// Path of the request URL, without host or query parameters
    pub fn path(&self) -> VoiceResult<String> {
        let mut path = String::with_capacity(SPEAK_PATH_PREFIX.len() + self.text.len());
        path.push_str(SPEAK_PATH_PREFIX);

        for c in self.text.chars() {
            if DISALLOWED_PATH_CHARACTERS.contains(c) {
                write!(path, "%{:02X}", c as u32)
                    .map_err(|e| VoiceError::PathEncoding(e.to_string()))?;
            } else {
                path.push(c);
            }
        }

        Ok(path)
    }

    /// Query parameters of the request URL, in a fixed order
    pub fn query_parameters(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (TEXT_TYPE_KEY, self.text_type.as_str()),
            (VOICE_ID_KEY, self.voice_id.as_str()),
            (OUTPUT_FORMAT_KEY, self.output_format.as_str()),
        ]
    }
}
