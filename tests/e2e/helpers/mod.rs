pub mod assertions;

pub use assertions::assert_persisted_shape;
pub use fixtures::{option_variants, ssml_options};
