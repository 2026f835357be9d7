//! Time-warp transforms over keyframe lists.
//!
//! All three work on the 0..1 animation timeline and pass constants through
//! untouched.

use serde::{Deserialize, Serialize};

use remap_api_core::{Point, PointDefinition};

use crate::domain::domain;
use crate::interp::inverse_lerp;
use crate::points::sort_points;

/// Play the animation backwards: `t -> 1 - t`, order reversed.
///
/// An easing shapes the segment that ends at its keyframe, so each easing is
/// direction-flipped (In <-> Out) and moved to the keyframe that now ends the
/// same segment. The first keyframe of the result has no easing.
///
/// Spline flags stay on their keyframes and are not corrected.
pub fn reverse(def: PointDefinition) -> PointDefinition {
    let mut points = match def {
        PointDefinition::Constant(v) => return PointDefinition::Constant(v),
        PointDefinition::Keyframes(points) => points,
    };
    sort_points(&mut points);
    points.reverse();

    let mut carried = None;
    for p in &mut points {
        p.time = 1.0 - p.time;
        let own = p.easing.take().map(|e| e.reversed());
        p.easing = carried;
        carried = own;
    }
    PointDefinition::Keyframes(points)
}

/// Play forward over [0, 0.5] then backward over [0.5, 1]. Constants and
/// single keyframes are returned unchanged.
pub fn mirror(def: PointDefinition) -> PointDefinition {
    let forward = match def {
        PointDefinition::Keyframes(points) if points.len() > 1 => points,
        other => return other,
    };

    let backward = match reverse(PointDefinition::Keyframes(forward.clone())) {
        PointDefinition::Keyframes(points) => points,
        PointDefinition::Constant(_) => Vec::new(),
    };

    let mut out: Vec<Point> = Vec::with_capacity(forward.len() * 2);
    out.extend(forward.into_iter().map(|mut p| {
        p.time *= 0.5;
        p
    }));
    out.extend(backward.into_iter().map(|mut p| {
        p.time = 0.5 + p.time * 0.5;
        p
    }));
    PointDefinition::Keyframes(out)
}

/// Result of [`normalize_beats_to_unit`]: the rescaled definition and the
/// span it was rescaled from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBeats {
    pub points: PointDefinition,
    pub min: f64,
    pub max: f64,
    pub duration: f64,
}

/// Rescale keyframe times (often authored in beats) so the earliest lands on
/// 0 and the latest on 1. A zero-length span maps every time to 0.
pub fn normalize_beats_to_unit(def: PointDefinition) -> NormalizedBeats {
    let span = match &def {
        PointDefinition::Constant(_) => None,
        PointDefinition::Keyframes(points) if points.is_empty() => None,
        PointDefinition::Keyframes(_) => Some(domain(&def)),
    };
    let Some(span) = span else {
        return NormalizedBeats {
            points: def,
            min: 0.0,
            max: 0.0,
            duration: 0.0,
        };
    };

    let points = match def {
        PointDefinition::Keyframes(mut points) => {
            for p in &mut points {
                p.time = inverse_lerp(span.min, span.max, p.time);
            }
            PointDefinition::Keyframes(points)
        }
        constant => constant,
    };

    NormalizedBeats {
        points,
        min: span.min,
        max: span.max,
        duration: span.duration(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remap_api_core::{Easing, Spline};

    fn ease(name: &str) -> Easing {
        name.parse().unwrap()
    }

    #[test]
    fn reverse_moves_easings_onto_the_same_segment() {
        let def = PointDefinition::Keyframes(vec![
            Point::new([0.0], 0.0),
            Point::new([1.0], 0.25).with_easing(ease("easeInQuad")),
            Point::new([2.0], 1.0).with_easing(ease("easeInOutSine")),
        ]);
        let out = reverse(def);
        let points = out.keyframes().unwrap();
        let times: Vec<f64> = points.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![0.0, 0.75, 1.0]);
        assert_eq!(points[0].easing, None);
        assert_eq!(points[1].easing, Some(ease("easeInOutSine")));
        assert_eq!(points[2].easing, Some(ease("easeOutQuad")));
    }

    #[test]
    fn reverse_leaves_splines_in_place() {
        let def = PointDefinition::Keyframes(vec![
            Point::new([0.0], 0.0),
            Point::new([1.0], 1.0).with_spline(Spline::CatmullRom),
        ]);
        let out = reverse(def);
        let points = out.keyframes().unwrap();
        assert_eq!(points[0].values, vec![1.0]);
        assert_eq!(points[0].spline, Some(Spline::CatmullRom));
        assert_eq!(points[1].spline, None);
    }

    #[test]
    fn mirror_leaves_static_input_alone() {
        let constant = PointDefinition::Constant(vec![3.0]);
        assert_eq!(mirror(constant.clone()), constant);

        let single = PointDefinition::Keyframes(vec![Point::new([3.0], 0.0)]);
        assert_eq!(mirror(single.clone()), single);
    }

    #[test]
    fn normalize_reports_the_original_span() {
        let def = PointDefinition::Keyframes(vec![
            Point::new([0.0], 4.0),
            Point::new([1.0], 6.0),
            Point::new([2.0], 12.0),
        ]);
        let n = normalize_beats_to_unit(def);
        assert_eq!((n.min, n.max, n.duration), (4.0, 12.0, 8.0));
        let times: Vec<f64> = n.points.keyframes().unwrap().iter().map(|p| p.time).collect();
        assert_eq!(times, vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn normalize_collapses_zero_span() {
        let def = PointDefinition::Keyframes(vec![Point::new([0.0], 2.0), Point::new([1.0], 2.0)]);
        let n = normalize_beats_to_unit(def);
        assert_eq!(n.duration, 0.0);
        assert!(n.points.keyframes().unwrap().iter().all(|p| p.time == 0.0));
    }
}
