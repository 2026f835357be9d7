//! Time-domain evaluation of point definitions.
//!
//! Model:
//! - A constant definition evaluates to itself at every time.
//! - Keyframes are ordered by time; outside the keyframe range the nearest end
//!   point is held.
//! - Inside the range, the bracketing pair (left.time < t <= right.time) is
//!   found by binary search. Segment progress is eased with the RIGHT
//!   keyframe's easing, then the values are blended according to the
//!   property's [`InterpolationKind`] and the right keyframe's flags.
//!
//! API:
//! - evaluate_at(kind, &PointDefinition, t) -> Vec<f64>
//! - evaluate_property / evaluate_transform for schema-aware callers
//! - evaluate_raw for wire definitions that may hold runtime tokens

use std::borrow::Cow;

use remap_api_core::{Point, PointDefinition, RawPointDefinition, Spline};

use crate::interp::{apply_easing, catmull_rom, inverse_lerp, lerp_hsv, lerp_rotation, lerp_values};
use crate::points::sort_points;
use crate::property::{AnimatedProperty, InterpolationKind};
use crate::transform::{vec3_from_slice, AnimatedTransform, Transform};

/// Evaluate `def` at `time`.
///
/// Unsorted keyframes are sorted (stably) on a private copy first. An empty
/// keyframe list evaluates to an empty vector.
pub fn evaluate_at(kind: impl Into<InterpolationKind>, def: &PointDefinition, time: f64) -> Vec<f64> {
    let points = match def {
        PointDefinition::Constant(v) => return v.clone(),
        PointDefinition::Keyframes(points) => points,
    };
    let points = ordered(points);
    sample_sorted(kind.into(), &points, time)
}

/// Evaluate a property by its schema.
pub fn evaluate_property(property: AnimatedProperty, def: &PointDefinition, time: f64) -> Vec<f64> {
    evaluate_at(property, def, time)
}

/// Evaluate every channel of an animated transform. Channels that evaluate
/// to fewer than three components keep their static default.
pub fn evaluate_transform(animated: &AnimatedTransform, time: f64) -> Transform {
    let defaults = Transform::default();
    let channel = |def: &Option<PointDefinition>, kind: InterpolationKind, fallback| {
        def.as_ref()
            .and_then(|d| vec3_from_slice(&evaluate_at(kind, d, time)))
            .unwrap_or(fallback)
    };
    Transform {
        position: channel(&animated.position, InterpolationKind::Linear, defaults.position),
        rotation: channel(&animated.rotation, InterpolationKind::Rotation, defaults.rotation),
        scale: channel(&animated.scale, InterpolationKind::Linear, defaults.scale),
    }
}

/// Evaluate a wire definition. Definitions holding runtime tokens have no
/// numeric value outside the game and yield `None`, as do malformed points.
pub fn evaluate_raw(
    kind: impl Into<InterpolationKind>,
    raw_def: &RawPointDefinition,
    time: f64,
) -> Option<Vec<f64>> {
    if raw_def.is_runtime() {
        log::warn!("skipping evaluation of a definition with runtime values");
        return None;
    }
    match PointDefinition::try_from(raw_def.clone()) {
        Ok(def) => Some(evaluate_at(kind, &def, time)),
        Err(err) => {
            log::warn!("cannot evaluate point definition: {err}");
            None
        }
    }
}

fn ordered(points: &[Point]) -> Cow<'_, [Point]> {
    if points.windows(2).all(|w| w[0].time <= w[1].time) {
        Cow::Borrowed(points)
    } else {
        let mut sorted = points.to_vec();
        sort_points(&mut sorted);
        Cow::Owned(sorted)
    }
}

fn sample_sorted(kind: InterpolationKind, points: &[Point], time: f64) -> Vec<f64> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            log::warn!("evaluating an empty keyframe list");
            return Vec::new();
        }
    };
    if time <= first.time {
        return first.values.clone();
    }
    if time >= last.time {
        return last.values.clone();
    }

    // For ordered, comparable times 1 <= right <= len - 1. A NaN time slips
    // past both clamps; it blends the ends with a NaN factor instead.
    let right = points.partition_point(|p| p.time < time);
    if right == 0 || right >= points.len() {
        return lerp_values(&first.values, &last.values, inverse_lerp(first.time, last.time, time));
    }
    let left = right - 1;
    let (l, r) = (&points[left], &points[right]);

    let t = apply_easing(r.easing, inverse_lerp(l.time, r.time, time));

    match kind {
        InterpolationKind::Rotation => lerp_rotation(&l.values, &r.values, t),
        InterpolationKind::Color if r.hsv_lerp => lerp_hsv(&l.values, &r.values, t),
        _ if r.spline == Some(Spline::CatmullRom) => {
            let before = &points[left.saturating_sub(1)];
            let after = &points[(right + 1).min(points.len() - 1)];
            catmull_rom(&before.values, &l.values, &r.values, &after.values, t)
        }
        _ => lerp_values(&l.values, &r.values, t),
    }
}
