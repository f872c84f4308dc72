use serde::{Deserialize, Serialize};

/// How the service should interpret the text it is asked to speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextType {
    /// Plain text, spoken as-is
    #[default]
    #[serde(rename = "text")]
    Text,
    /// Speech Synthesis Markup Language. The text must be valid SSML for the
    /// request to be accepted.
    #[serde(rename = "ssml")]
    Ssml,
}

impl TextType {
    pub const ALL: [TextType; 2] = [TextType::Text, TextType::Ssml];

    /// Canonical token used in persisted options and request URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Ssml => "ssml",
        }
    }

    /// Exact, case-sensitive lookup. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "text" => Some(TextType::Text),
            "ssml" => Some(TextType::Ssml),
            _ => None,
        }
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
