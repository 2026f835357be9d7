//! Transforms and their composition.
//!
//! Euler angles are in degrees and use the intrinsic Y-X-Z order throughout
//! (`R = Ry * Rx * Rz`), so every conversion below round-trips with every
//! other. Rotation math goes through quaternions; full composition goes
//! through 4x4 TRS matrices.

use nalgebra::{Matrix3, Matrix4, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use remap_api_core::PointDefinition;

pub type Vec3 = [f64; 3];

/// Below this the two rotations are treated as identical.
const SLERP_EPSILON: f64 = 1.0e-9;

/// A static transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl Transform {
    pub fn to_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::from(self.position))
            * euler_to_quaternion(self.rotation).to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&Vector3::from(self.scale))
    }

    /// Decompose a TRS matrix. A negative determinant is folded into the X
    /// scale.
    pub fn from_matrix(m: &Matrix4<f64>) -> Self {
        let basis: Matrix3<f64> = m.fixed_view::<3, 3>(0, 0).into_owned();
        let mut sx = basis.column(0).norm();
        let sy = basis.column(1).norm();
        let sz = basis.column(2).norm();
        if basis.determinant() < 0.0 {
            sx = -sx;
        }

        let mut rot = basis;
        for (c, s) in [sx, sy, sz].into_iter().enumerate() {
            if s != 0.0 {
                for r in 0..3 {
                    rot[(r, c)] /= s;
                }
            }
        }

        Self {
            position: [m[(0, 3)], m[(1, 3)], m[(2, 3)]],
            rotation: matrix_to_euler(&rot),
            scale: [sx, sy, sz],
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Euler degrees (Y-X-Z) to a unit quaternion.
pub fn euler_to_quaternion(euler: Vec3) -> UnitQuaternion<f64> {
    let [x, y, z] = euler.map(f64::to_radians);
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), y)
        * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), x)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), z)
}

/// Unit quaternion to Euler degrees (Y-X-Z).
pub fn quaternion_to_euler(q: &UnitQuaternion<f64>) -> Vec3 {
    matrix_to_euler(q.to_rotation_matrix().matrix())
}

/// Pure rotation matrix to Euler degrees (Y-X-Z).
fn matrix_to_euler(m: &Matrix3<f64>) -> Vec3 {
    let m23 = m[(1, 2)].clamp(-1.0, 1.0);
    let x = (-m23).asin();
    let (y, z) = if m23.abs() < 0.999_999_9 {
        (m[(0, 2)].atan2(m[(2, 2)]), m[(1, 0)].atan2(m[(1, 1)]))
    } else {
        ((-m[(2, 0)]).atan2(m[(0, 0)]), 0.0)
    };
    [x, y, z].map(f64::to_degrees)
}

/// Shortest-path spherical interpolation between two Euler rotations.
pub fn slerp_euler(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    let qa = euler_to_quaternion(a);
    let qb = euler_to_quaternion(b);
    let q = qa
        .try_slerp(&qb, t, SLERP_EPSILON)
        .unwrap_or(qa);
    quaternion_to_euler(&q)
}

/// Apply `rotation` on top of `target` (quaternion pre-multiplication).
pub fn combine_rotations(target: Vec3, rotation: Vec3) -> Vec3 {
    let q = euler_to_quaternion(rotation) * euler_to_quaternion(target);
    quaternion_to_euler(&q)
}

/// Compose `child` under `parent`, optionally pivoting about `anchor`.
pub fn combine(child: &Transform, parent: &Transform, anchor: Option<Vec3>) -> Transform {
    let anchor = anchor.unwrap_or([0.0; 3]);
    let mut local = *child;
    for i in 0..3 {
        local.position[i] -= anchor[i];
    }
    let mut out = Transform::from_matrix(&(parent.to_matrix() * local.to_matrix()));
    for i in 0..3 {
        out.position[i] += anchor[i];
    }
    out
}

/// A transform whose channels may be animated. Missing channels take the
/// static defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatedTransform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PointDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<PointDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<PointDefinition>,
}

impl AnimatedTransform {
    /// Channels with defaults filled in: position and rotation zero, scale one.
    pub fn resolved(&self) -> [PointDefinition; 3] {
        let defaults = Transform::default();
        [
            (&self.position, defaults.position),
            (&self.rotation, defaults.rotation),
            (&self.scale, defaults.scale),
        ]
        .map(|(channel, fallback)| {
            channel
                .clone()
                .unwrap_or_else(|| PointDefinition::Constant(fallback.to_vec()))
        })
    }

    /// The static transform this describes, when no channel is animated.
    pub fn as_static(&self) -> Option<Transform> {
        let [position, rotation, scale] = self.resolved();
        Some(Transform {
            position: constant_vec3(position)?,
            rotation: constant_vec3(rotation)?,
            scale: constant_vec3(scale)?,
        })
    }
}

impl From<Transform> for AnimatedTransform {
    fn from(t: Transform) -> Self {
        Self {
            position: Some(PointDefinition::Constant(t.position.to_vec())),
            rotation: Some(PointDefinition::Constant(t.rotation.to_vec())),
            scale: Some(PointDefinition::Constant(t.scale.to_vec())),
        }
    }
}

fn constant_vec3(def: PointDefinition) -> Option<Vec3> {
    match def.simplify() {
        PointDefinition::Constant(v) => vec3_from_slice(&v),
        PointDefinition::Keyframes(_) => None,
    }
}

/// First three components, or `None` when fewer are present.
pub fn vec3_from_slice(v: &[f64]) -> Option<Vec3> {
    match v {
        [x, y, z, ..] => Some([*x, *y, *z]),
        _ => None,
    }
}
