//! Core error type.
//!
//! Sub-crates define their own error enums; where a core operation fails
//! inside them (e.g. `Floor::new` in the loader) the message is carried over
//! with the sub-crate's context added.

use thiserror::Error;

/// The error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("floor numbers start at 1, got {0}")]
    InvalidFloor(u32),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `lift-core`.
pub type LiftResult<T> = Result<T, LiftError>;
