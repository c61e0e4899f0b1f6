//! Error type shared across the crate.

use thiserror::Error;

/// Errors raised while turning material input into textures.
///
/// Generation itself is total: once a request has been parsed, producing the
/// rasters cannot fail.  Errors only come from malformed input or settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextureError {
    /// A base colour was not a `#RRGGBB` hex string.
    #[error("invalid color format {input:?}: {reason}")]
    InvalidColorFormat { input: String, reason: &'static str },
    /// A [`SynthConfig`](crate::config::SynthConfig) field holds an unusable value.
    #[error("invalid config: `{field}` must be finite and non-negative (got {value})")]
    InvalidConfig { field: &'static str, value: f64 },
}
