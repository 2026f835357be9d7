//! Flatten a child animation under an (optionally animated) parent.

use crate::baking::{bake, BakeSample};
use crate::config::AnimationSettings;
use crate::domain::transform_domain;
use crate::error::AnimationError;
use crate::sampling::evaluate_transform;
use crate::transform::{combine, AnimatedTransform, Transform, Vec3};

/// The child's animation as seen in the parent's space, optionally pivoting
/// about `anchor`.
///
/// An identity parent without an anchor leaves the child as is. When neither
/// side is animated this is a single matrix composition.
/// Otherwise the child is baked over the union of both domains, composing
/// with the parent sampled at each bake time.
pub fn emulate_parent(
    child: &AnimatedTransform,
    parent: &AnimatedTransform,
    anchor: Option<Vec3>,
    settings: &AnimationSettings,
) -> Result<AnimatedTransform, AnimationError> {
    let parent_static = parent.as_static();
    if anchor.is_none() && parent_static.as_ref().is_some_and(Transform::is_identity) {
        return Ok(child.clone());
    }
    if let (Some(c), Some(p)) = (child.as_static(), parent_static) {
        return Ok(AnimatedTransform::from(combine(&c, &p, anchor)));
    }

    let domain = transform_domain(child).union(transform_domain(parent));
    let mut compose = |sample: &mut BakeSample| {
        let p = evaluate_transform(parent, sample.time);
        sample.set_transform(combine(&sample.transform(), &p, anchor));
    };
    bake(child, Some(&mut compose), settings, Some(domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use remap_api_core::{Point, PointDefinition};

    #[test]
    fn static_pair_composes_once() {
        let child = AnimatedTransform::from(Transform {
            position: [1.0, 0.0, 0.0],
            ..Default::default()
        });
        let parent = AnimatedTransform::from(Transform {
            position: [0.0, 2.0, 0.0],
            ..Default::default()
        });
        let out = emulate_parent(&child, &parent, None, &AnimationSettings::default()).unwrap();
        assert_eq!(out.position, Some(PointDefinition::Constant(vec![1.0, 2.0, 0.0])));
    }

    #[test]
    fn identity_parent_keeps_the_child_curve() {
        let child = AnimatedTransform {
            rotation: Some(PointDefinition::Keyframes(vec![
                Point::new([0.0, 0.0, 0.0], 0.0),
                Point::new([0.0, 45.0, 0.0], 0.3),
                Point::new([0.0, 90.0, 0.0], 1.0),
            ])),
            ..Default::default()
        };
        let parent = AnimatedTransform::from(Transform::default());
        assert!(parent.as_static().is_some_and(|p| p.is_identity()));
        let out = emulate_parent(&child, &parent, None, &AnimationSettings::default()).unwrap();
        assert_eq!(out, child);
    }

    #[test]
    fn animated_parent_is_baked_in() {
        let child = AnimatedTransform::from(Transform {
            position: [1.0, 0.0, 0.0],
            ..Default::default()
        });
        let parent = AnimatedTransform {
            position: Some(PointDefinition::Keyframes(vec![
                Point::new([0.0, 0.0, 0.0], 0.0),
                Point::new([0.0, 10.0, 0.0], 1.0),
            ])),
            ..Default::default()
        };
        let out = emulate_parent(&child, &parent, None, &AnimationSettings::default()).unwrap();
        let position = out.position.unwrap();
        let points = position.keyframes().unwrap();
        // A straight ramp survives as its two endpoints.
        assert_eq!(points.len(), 2);
        assert_abs_diff_eq!(points[0].values[1], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(points[1].values[0], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(points[1].values[1], 10.0, epsilon = 1e-9);
    }
}
