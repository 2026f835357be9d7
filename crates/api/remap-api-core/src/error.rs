use thiserror::Error;

/// Errors produced while decoding or editing points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PointError {
    /// `set_flag` was given neither a new value nor a flag to match.
    #[error("cannot resolve which flag to edit: no value and no match key")]
    AmbiguousFlag,
    /// No numeric slot was found to act as the time value.
    #[error("point has no numeric time slot")]
    MissingTime,
    /// A runtime token reached a conversion that needs numbers.
    #[error("point holds runtime value '{0}'")]
    RuntimeValue(String),
    #[error("unknown easing: {0}")]
    UnknownEasing(String),
    #[error("unknown spline: {0}")]
    UnknownSpline(String),
    #[error("unknown point flag: {0}")]
    UnknownFlag(String),
    #[error("point json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for PointError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
