//! Interpolation primitives.
//!
//! Easing reshapes segment progress; the functions here blend values with
//! that progress. Which blend a property uses is decided by
//! [`InterpolationKind`](crate::property::InterpolationKind).

pub mod easing;
pub mod functions;

pub use easing::apply_easing;
pub use functions::{catmull_rom, inverse_lerp, lerp, lerp_hsv, lerp_rotation, lerp_values};
