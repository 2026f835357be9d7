//! Raw point definitions: a bare value vector or an array of points.

use serde::{Deserialize, Serialize};

use crate::element::{PointElement, RawPoint};
use crate::raw;

/// A point definition exactly as stored in a beatmap field.
///
/// Deserialization tries the array-of-points shape first, so `[]` decodes as
/// an empty `Complex` definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPointDefinition {
    Complex(Vec<RawPoint>),
    Simple(Vec<PointElement>),
}

impl RawPointDefinition {
    /// True for a bare value vector (or bare runtime token). Empty
    /// definitions are never simple.
    pub fn is_simple(&self) -> bool {
        matches!(self, RawPointDefinition::Simple(v) if !v.is_empty())
    }

    /// Array-of-points form; a simple value becomes one point at time 0.
    pub fn complexify(self) -> Vec<RawPoint> {
        match self {
            RawPointDefinition::Simple(v) if !v.is_empty() => {
                let mut point = v;
                point.push(PointElement::Number(0.0));
                vec![point]
            }
            RawPointDefinition::Simple(_) => Vec::new(),
            RawPointDefinition::Complex(points) => points,
        }
    }

    /// Collapse a lone point at exactly time 0 back into a bare vector.
    /// Anything else is returned unchanged.
    pub fn simplify(self) -> Self {
        match self {
            RawPointDefinition::Complex(mut points) if points.len() == 1 => {
                let point = &points[0];
                match (raw::time_index(point), raw::time(point)) {
                    (Some(i), Some(t)) if t == 0.0 => {
                        let mut point = points.swap_remove(0);
                        point.truncate(i);
                        RawPointDefinition::Simple(point)
                    }
                    _ => RawPointDefinition::Complex(points),
                }
            }
            other => other,
        }
    }

    /// True when any value slot is bound to a runtime token or a nested
    /// runtime expression rather than a number.
    pub fn is_runtime(&self) -> bool {
        match self {
            RawPointDefinition::Simple(v) => v
                .iter()
                .any(|e| e.as_text().is_some() || e.is_runtime_expression()),
            RawPointDefinition::Complex(points) => points.iter().any(|p| point_is_runtime(p)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RawPointDefinition::Simple(v) if v.is_empty() => 0,
            RawPointDefinition::Simple(_) => 1,
            RawPointDefinition::Complex(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A raw point is runtime-bound when its value region holds a string or any
/// slot holds a nested operator expression.
pub fn point_is_runtime(point: &[PointElement]) -> bool {
    let value_end = raw::time_index(point).unwrap_or(point.len());
    point[..value_end].iter().any(|e| e.as_text().is_some())
        || point.iter().any(PointElement::is_runtime_expression)
}

impl From<Vec<RawPoint>> for RawPointDefinition {
    fn from(points: Vec<RawPoint>) -> Self {
        RawPointDefinition::Complex(points)
    }
}
