//! Baking API: sample an animated transform into dense keyframes, then
//! optimize each channel.

use serde::{Deserialize, Serialize};

use remap_api_core::{Point, PointDefinition};

use crate::config::AnimationSettings;
use crate::domain::{transform_domain, Domain};
use crate::error::AnimationError;
use crate::optimizer::optimize;
use crate::sampling::evaluate_transform;
use crate::transform::{AnimatedTransform, Transform, Vec3};

/// Absorbs float error when snapping the domain to whole steps.
const STEP_EPSILON: f64 = 1.0e-9;

/// One baked sample. Callbacks may rewrite any field; the time is written
/// back too.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakeSample {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub time: f64,
}

impl BakeSample {
    pub fn new(transform: Transform, time: f64) -> Self {
        Self {
            position: transform.position,
            rotation: transform.rotation,
            scale: transform.scale,
            time,
        }
    }

    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.position = transform.position;
        self.rotation = transform.rotation;
        self.scale = transform.scale;
    }
}

/// Sample times for `domain` at `divisions` steps per unit: the domain
/// widened outwards to whole steps, both ends included. Times are computed
/// as `k / divisions` so whole units land exactly.
pub fn sample_times(domain: Domain, divisions: u32) -> Vec<f64> {
    let domain = if domain.is_empty() {
        Domain::new(0.0, 0.0)
    } else {
        domain
    };
    let d = f64::from(divisions);
    let first = (domain.min * d + STEP_EPSILON).floor() as i64;
    let last = (domain.max * d - STEP_EPSILON).ceil() as i64;
    (first..=last).map(|k| k as f64 / d).collect()
}

/// Bake `animated` over `domain` (the union of its channel domains when
/// `None`).
///
/// `on_sample` sees every sample before it is recorded and may change it;
/// this is how parent transforms get folded into a child.
pub fn bake(
    animated: &AnimatedTransform,
    mut on_sample: Option<&mut dyn FnMut(&mut BakeSample)>,
    settings: &AnimationSettings,
    domain: Option<Domain>,
) -> Result<AnimatedTransform, AnimationError> {
    let divisions = settings.sample_divisions()?;
    let domain = domain.unwrap_or_else(|| transform_domain(animated));
    let times = sample_times(domain, divisions);
    log::trace!(
        "baking {} samples over [{}, {}] ({divisions} steps per unit)",
        times.len(),
        domain.min,
        domain.max
    );

    let mut position = Vec::with_capacity(times.len());
    let mut rotation = Vec::with_capacity(times.len());
    let mut scale = Vec::with_capacity(times.len());

    for t in times {
        let mut sample = BakeSample::new(evaluate_transform(animated, t), t);
        if let Some(f) = on_sample.as_deref_mut() {
            f(&mut sample);
        }
        position.push(Point::new(sample.position, sample.time));
        rotation.push(Point::new(sample.rotation, sample.time));
        scale.push(Point::new(sample.scale, sample.time));
    }

    let opt = &settings.optimize_settings;
    Ok(AnimatedTransform {
        position: Some(optimize(PointDefinition::Keyframes(position), opt)),
        rotation: Some(optimize(PointDefinition::Keyframes(rotation), opt)),
        scale: Some(optimize(PointDefinition::Keyframes(scale), opt)),
    })
}
