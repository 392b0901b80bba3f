//! Error types for the Galaxy3D shader subsystem
//!
//! This module defines the errors raised while a shader is assembled from
//! reflection data and while its layouts are exported for pipeline creation.

use std::fmt;
use crate::shader::{BindingKey, ShaderStage};

/// Result type for Galaxy3D shader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D shader errors
#[derive(Debug, Clone)]
pub enum Error {
    /// File suffix or shading language tag is not recognised
    UnsupportedFormat(String),

    /// A keyed binding layout already holds an entry with this name
    DuplicateBindingName(String),

    /// A stage record was added twice
    DuplicateStage(ShaderStage),

    /// A stage-specific query or insertion was made on the wrong or an absent stage
    MisusedStageQuery(String),

    /// Binding slot does not fit the packed (set * 10 + binding) encoding
    InvalidBindingSlot(BindingKey),

    /// Two different resources claim the same (set, binding) pair
    BindingConflict(String),

    /// Any other structural violation of a layout
    InvalidLayout(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            Error::DuplicateBindingName(name) => write!(f, "Duplicate binding name: {}", name),
            Error::DuplicateStage(stage) => write!(f, "Duplicate shader stage: {}", stage),
            Error::MisusedStageQuery(msg) => write!(f, "Misused stage query: {}", msg),
            Error::InvalidBindingSlot(key) => write!(
                f,
                "Invalid binding slot: set {} binding {} does not fit the packed key",
                key.set, key.binding
            ),
            Error::BindingConflict(msg) => write!(f, "Binding conflict: {}", msg),
            Error::InvalidLayout(msg) => write!(f, "Invalid layout: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
