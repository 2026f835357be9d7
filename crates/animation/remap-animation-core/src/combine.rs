//! Layering one animation on top of another.

use serde::{Deserialize, Serialize};

use remap_api_core::{Point, PointDefinition};

use crate::property::{AnimatedProperty, InterpolationKind};
use crate::sampling::evaluate_at;
use crate::transform::{combine_rotations, vec3_from_slice};

/// How two values of the same property stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CombineMode {
    #[default]
    Additive,
    Multiplicative,
    /// Quaternion composition of Euler rotations.
    Rotation,
}

impl From<AnimatedProperty> for CombineMode {
    fn from(p: AnimatedProperty) -> Self {
        match (p, p.interpolation()) {
            (AnimatedProperty::Scale, _) => CombineMode::Multiplicative,
            (_, InterpolationKind::Rotation) => CombineMode::Rotation,
            _ => CombineMode::Additive,
        }
    }
}

impl CombineMode {
    /// Stack `top` onto `base`.
    pub fn apply(self, base: &[f64], top: &[f64]) -> Vec<f64> {
        match self {
            CombineMode::Additive => base.iter().zip(top).map(|(a, b)| a + b).collect(),
            CombineMode::Multiplicative => base.iter().zip(top).map(|(a, b)| a * b).collect(),
            CombineMode::Rotation => match (vec3_from_slice(base), vec3_from_slice(top)) {
                (Some(target), Some(rotation)) => combine_rotations(target, rotation).to_vec(),
                _ => CombineMode::Additive.apply(base, top),
            },
        }
    }

    fn interpolation(self) -> InterpolationKind {
        match self {
            CombineMode::Rotation => InterpolationKind::Rotation,
            _ => InterpolationKind::Linear,
        }
    }
}

/// Stack `top` onto `base`.
///
/// A constant side is applied to every keyframe of the other side, keeping
/// that side's flags. Two keyframed sides are resampled at the union of their
/// keyframe times; the result is linear between those times.
pub fn combine_animations(
    base: PointDefinition,
    top: PointDefinition,
    mode: impl Into<CombineMode>,
) -> PointDefinition {
    let mode = mode.into();
    match (base, top) {
        (PointDefinition::Constant(a), PointDefinition::Constant(b)) => {
            PointDefinition::Constant(mode.apply(&a, &b))
        }
        (PointDefinition::Keyframes(mut points), PointDefinition::Constant(c)) => {
            for p in &mut points {
                p.values = mode.apply(&p.values, &c);
            }
            PointDefinition::Keyframes(points)
        }
        (PointDefinition::Constant(c), PointDefinition::Keyframes(mut points)) => {
            for p in &mut points {
                p.values = mode.apply(&c, &p.values);
            }
            PointDefinition::Keyframes(points)
        }
        (base @ PointDefinition::Keyframes(_), top @ PointDefinition::Keyframes(_)) => {
            let kind = mode.interpolation();
            let mut times: Vec<f64> = [&base, &top]
                .into_iter()
                .filter_map(PointDefinition::keyframes)
                .flatten()
                .map(|p| p.time)
                .collect();
            times.sort_by(f64::total_cmp);
            times.dedup();

            let points = times
                .into_iter()
                .map(|t| {
                    let values = mode.apply(&evaluate_at(kind, &base, t), &evaluate_at(kind, &top, t));
                    Point::new(values, t)
                })
                .collect();
            PointDefinition::Keyframes(points)
        }
    }
}
