//! remap-api-core: point encoding and the typed keyframe model (engine-agnostic)
//!
//! Animated fields in a beatmap are stored as flexible arrays that mix numbers
//! and string flags. This crate owns that wire shape ([`RawPointDefinition`],
//! [`PointElement`]) together with the typed model the numeric core works on
//! ([`PointDefinition`], [`Point`]).

pub mod definition;
pub mod easing;
pub mod element;
pub mod error;
pub mod json;
pub mod point;
pub mod raw;

pub use definition::RawPointDefinition;
pub use easing::{Easing, EasingCurve, EasingDirection, Spline};
pub use element::{PointElement, RawPoint};
pub use error::PointError;
pub use point::{Point, PointDefinition, PointOrToken, RuntimeToken};

pub type Result<T> = core::result::Result<T, PointError>;
