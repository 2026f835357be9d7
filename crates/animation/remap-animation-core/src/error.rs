//! Error types for the animation core

use remap_api_core::PointError;

/// Errors raised by the animation pipeline.
///
/// Numeric degeneracies (NaN inputs, inverted domains) are not errors; they
/// flow through as numbers. Only configuration and decoding problems surface
/// here.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AnimationError {
    /// A point could not be decoded or edited
    #[error(transparent)]
    Point(#[from] PointError),

    /// Settings that would make the pipeline divide by zero or never finish
    #[error("Invalid settings: {reason}")]
    InvalidSettings { reason: String },

    /// Property name with no known interpolation schema
    #[error("Unknown animated property: {name}")]
    UnknownProperty { name: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl AnimationError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::InvalidSettings { .. } => "settings",
            Self::UnknownProperty { .. } => "schema",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
