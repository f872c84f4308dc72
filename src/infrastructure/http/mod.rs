use crate::domain::voice::RequestOptions;
use crate::error::VoiceResult;

/// Assembles speak request URLs against an API host.
///
/// Only builds strings. Sending the request, authenticating it and reading
/// the audio back are up to the HTTP client that consumes the URL.
#[derive(Debug, Clone)]
pub struct SpeakRequest {
    base_url: String,
    extra_params: Vec<(String, String)>,
}

impl SpeakRequest {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            extra_params: Vec::new(),
        }
    }

    /// Append a query parameter after the ones derived from the options,
    /// e.g. an access token added by the transport layer
    pub fn with_extra_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((name.into(), value.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full GET URL for the given options
    pub fn url_for(&self, options: &RequestOptions) -> VoiceResult<String> {
        let path = options.path()?;

        let query = options
            .query_parameters()
            .into_iter()
            .chain(
                self.extra_params
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            )
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");

        tracing::debug!(
            voice_id = %options.voice_id,
            text_type = %options.text_type,
            output_format = %options.output_format,
            text_length = options.text.len(),
            "Built speak request URL"
        );

        Ok(format!("{}/{}?{}", self.base_url, path, query))
    }
}
