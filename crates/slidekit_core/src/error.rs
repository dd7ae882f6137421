//! Configuration errors
//!
//! Engines never fail at runtime; index arithmetic is kept in range by
//! construction. The only thing that can be rejected is a configuration that
//! would break that arithmetic.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("carousel must contain at least one slide")]
    EmptyTrack,

    #[error("child width must be between 0 and 100 percent, got {0}")]
    ChildWidthOutOfRange(f32),

    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidRatio { name: &'static str, value: f32 },
}
