/// Main error type for building and persisting voice request options
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    /// One or more persisted enum tokens were not recognized. The persisted
    /// state is unusable and should be discarded.
    #[error("Failed to decode request options, unrecognized value for: {}", .fields.join(", "))]
    Decode { fields: Vec<&'static str> },

    #[error("Failed to percent-encode request path: {0}")]
    PathEncoding(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl VoiceError {
    /// Names of the persisted keys that failed to decode, empty for other errors
    pub fn failed_fields(&self) -> &[&'static str] {
        match self {
            Self::Decode { fields } => fields,
            _ => &[],
        }
    }
}

/// Custom result type for the crate
pub type VoiceResult<T> = Result<T, VoiceError>;
