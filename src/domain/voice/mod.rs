pub mod audio_format;
pub mod options;
pub mod persisted;
pub mod text_type;
pub mod voice_id;

pub use audio_format::AudioFormat;
pub use options::{RequestOptions, SPEAK_PATH_PREFIX};
pub use persisted::PersistedOptions;
pub use text_type::TextType;
pub use voice_id::VoiceId;
