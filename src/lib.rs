//! Request options for a text-to-speech web API.
//!
//! [`RequestOptions`] describes what to say and how: the text, whether it is
//! plain text or SSML, the voice, and the audio format. It can be persisted
//! to a key/value form and rebuilt from it, and it derives the path and query
//! parameters of the speak request. Sending the request is left to the
//! caller.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::voice::{AudioFormat, PersistedOptions, RequestOptions, TextType, VoiceId};
pub use error::{VoiceError, VoiceResult};
