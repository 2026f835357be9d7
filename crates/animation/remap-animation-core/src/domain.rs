//! Time span covered by an animation.

use serde::{Deserialize, Serialize};

use remap_api_core::PointDefinition;

use crate::transform::AnimatedTransform;

/// Inclusive time span. The default `{min: 1, max: 0}` is inverted on
/// purpose: it is what an animation with no keyframes reports, and
/// [`Domain::is_empty`] detects it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 1.0, max: 0.0 }
    }
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn duration(&self) -> f64 {
        self.max - self.min
    }

    /// Smallest domain covering both.
    pub fn union(self, other: Domain) -> Domain {
        Domain {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Min and max keyframe time. A constant counts as one keyframe at 0.
pub fn domain(def: &PointDefinition) -> Domain {
    match def {
        PointDefinition::Constant(_) => Domain::new(0.0, 0.0),
        PointDefinition::Keyframes(points) => points.iter().fold(Domain::default(), |d, p| {
            Domain::new(d.min.min(p.time), d.max.max(p.time))
        }),
    }
}

/// Union of the channel domains of `animated`, missing channels resolved to
/// their static defaults first (so the result always includes 0 unless
/// every channel is keyframed).
pub fn transform_domain(animated: &AnimatedTransform) -> Domain {
    animated
        .resolved()
        .iter()
        .map(domain)
        .fold(Domain::default(), Domain::union)
}
