//! remap-animation-core: keyframe evaluation, optimization and baking
//!
//! Works on the typed keyframe model from `remap-api-core`. Everything here is
//! synchronous and free of shared state: settings are read-only inputs and
//! every operation takes ownership of (or borrows) the definitions it reads,
//! so independent animations can be processed in parallel by the caller.

pub mod baking;
pub mod color;
pub mod combine;
pub mod config;
pub mod domain;
pub mod error;
pub mod interp;
pub mod optimizer;
pub mod parent;
pub mod points;
pub mod property;
pub mod sampling;
pub mod transform;
pub mod warp;

// Re-exports for consumers
pub use baking::{bake, BakeSample};
pub use combine::{combine_animations, CombineMode};
pub use config::{AnimationSettings, OptimizeSettings};
pub use domain::{domain, transform_domain, Domain};
pub use error::AnimationError;
pub use optimizer::{
    optimize, optimize_points, optimize_points_with_stats, Candidate, OptimizeHeuristic,
    OptimizeStats, PointInfo,
};
pub use parent::emulate_parent;
pub use points::{iterate_points, sort_points};
pub use property::{AnimatedProperty, InterpolationKind};
pub use sampling::{evaluate_at, evaluate_property, evaluate_raw, evaluate_transform};
pub use transform::{combine, combine_rotations, AnimatedTransform, Transform, Vec3};
pub use warp::{mirror, normalize_beats_to_unit, reverse, NormalizedBeats};
pub use remap_api_core::{Point, PointDefinition};

pub type Result<T> = core::result::Result<T, AnimationError>;
