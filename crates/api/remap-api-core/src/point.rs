//! Typed keyframes.
//!
//! [`Point`] replaces the flexible wire array with explicit fields, so the
//! numeric core never scans for the time slot. Conversion from the wire form
//! happens once, in [`TryFrom<RawPointDefinition>`].

use serde::{Deserialize, Serialize};

use crate::definition::{point_is_runtime, RawPointDefinition};
use crate::easing::{Easing, Spline, EASING_PREFIX, SPLINE_PREFIX};
use crate::element::{PointElement, RawPoint};
use crate::error::PointError;
use crate::raw::{self, HSV_LERP_FLAG};

/// One keyframe: values at a time, plus flags describing the segment that
/// ends at this point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub values: Vec<f64>,
    pub time: f64,
    pub easing: Option<Easing>,
    pub spline: Option<Spline>,
    pub hsv_lerp: bool,
}

impl Point {
    pub fn new(values: impl Into<Vec<f64>>, time: f64) -> Self {
        Self {
            values: values.into(),
            time,
            ..Default::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn with_spline(mut self, spline: Spline) -> Self {
        self.spline = Some(spline);
        self
    }

    pub fn with_hsv_lerp(mut self) -> Self {
        self.hsv_lerp = true;
        self
    }

    /// True when any flag trails the time value on the wire.
    pub fn has_flags(&self) -> bool {
        self.easing.is_some() || self.spline.is_some() || self.hsv_lerp
    }

    /// Wire form. Flags are always written as easing, spline, `lerpHSV`.
    pub fn to_raw(&self) -> RawPoint {
        let mut out: RawPoint = self
            .values
            .iter()
            .copied()
            .map(PointElement::Number)
            .collect();
        out.push(PointElement::Number(self.time));
        if let Some(e) = self.easing {
            out.push(PointElement::Text(e.name()));
        }
        if let Some(s) = self.spline {
            out.push(PointElement::from(s.name()));
        }
        if self.hsv_lerp {
            out.push(PointElement::from(HSV_LERP_FLAG));
        }
        out
    }
}

impl TryFrom<&[PointElement]> for Point {
    type Error = PointError;

    fn try_from(point: &[PointElement]) -> Result<Self, Self::Error> {
        if point_is_runtime(point) {
            return Err(PointError::RuntimeValue(runtime_name(point)));
        }
        let ti = raw::time_index(point).ok_or(PointError::MissingTime)?;
        let mut out = Point {
            values: raw::numeric_values(point).ok_or(PointError::MissingTime)?,
            time: point[ti].as_number().ok_or(PointError::MissingTime)?,
            ..Default::default()
        };
        for flag in &point[ti + 1..] {
            let Some(flag) = flag.as_text() else {
                return Err(PointError::UnknownFlag(format!("{flag:?}")));
            };
            if flag == HSV_LERP_FLAG {
                out.hsv_lerp = true;
            } else if flag.contains(EASING_PREFIX) {
                out.easing = Some(flag.parse()?);
            } else if flag.contains(SPLINE_PREFIX) {
                out.spline = Some(flag.parse()?);
            } else {
                return Err(PointError::UnknownFlag(flag.to_string()));
            }
        }
        Ok(out)
    }
}

fn runtime_name(point: &[PointElement]) -> String {
    point
        .iter()
        .find_map(PointElement::as_text)
        .map(str::to_string)
        .unwrap_or_else(|| "<expression>".to_string())
}

/// A live value resolved by the game at play time, kept verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeToken(pub RawPoint);

impl RuntimeToken {
    pub fn name(&self) -> String {
        runtime_name(&self.0)
    }

    pub fn time(&self) -> Option<f64> {
        raw::time(&self.0)
    }
}

/// A decoded wire point: either numeric or bound to a runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum PointOrToken {
    Point(Point),
    Token(RuntimeToken),
}

impl PointOrToken {
    /// Decode every point of a raw definition, keeping runtime points as
    /// tokens instead of failing.
    pub fn decode_all(def: RawPointDefinition) -> Result<Vec<PointOrToken>, PointError> {
        def.complexify()
            .into_iter()
            .map(|p| {
                if point_is_runtime(&p) {
                    Ok(PointOrToken::Token(RuntimeToken(p)))
                } else {
                    Point::try_from(p.as_slice()).map(PointOrToken::Point)
                }
            })
            .collect()
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            PointOrToken::Point(p) => Some(p),
            PointOrToken::Token(_) => None,
        }
    }

    pub fn to_raw(&self) -> RawPoint {
        match self {
            PointOrToken::Point(p) => p.to_raw(),
            PointOrToken::Token(t) => t.0.clone(),
        }
    }
}

/// A typed point definition: a constant vector or a list of keyframes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPointDefinition", into = "RawPointDefinition")]
pub enum PointDefinition {
    Constant(Vec<f64>),
    Keyframes(Vec<Point>),
}

impl PointDefinition {
    pub fn is_constant(&self) -> bool {
        matches!(self, PointDefinition::Constant(_))
    }

    /// Keyframe form; a constant becomes one keyframe at time 0.
    pub fn complexify(self) -> Vec<Point> {
        match self {
            PointDefinition::Constant(v) => vec![Point::new(v, 0.0)],
            PointDefinition::Keyframes(points) => points,
        }
    }

    /// Collapse a lone keyframe at exactly time 0 back into a constant.
    pub fn simplify(self) -> Self {
        match self {
            PointDefinition::Keyframes(mut points) if points.len() == 1 && points[0].time == 0.0 => {
                PointDefinition::Constant(points.swap_remove(0).values)
            }
            other => other,
        }
    }

    /// Borrowing view of the keyframes; `None` for constants.
    pub fn keyframes(&self) -> Option<&[Point]> {
        match self {
            PointDefinition::Constant(_) => None,
            PointDefinition::Keyframes(points) => Some(points),
        }
    }
}

impl From<Vec<f64>> for PointDefinition {
    fn from(v: Vec<f64>) -> Self {
        PointDefinition::Constant(v)
    }
}

impl From<Vec<Point>> for PointDefinition {
    fn from(points: Vec<Point>) -> Self {
        PointDefinition::Keyframes(points)
    }
}

impl TryFrom<RawPointDefinition> for PointDefinition {
    type Error = PointError;

    fn try_from(raw_def: RawPointDefinition) -> Result<Self, Self::Error> {
        match raw_def {
            RawPointDefinition::Simple(v) if !v.is_empty() => {
                let values: Option<Vec<f64>> = v.iter().map(PointElement::as_number).collect();
                values
                    .map(PointDefinition::Constant)
                    .ok_or_else(|| PointError::RuntimeValue(runtime_name(&v)))
            }
            other => other
                .complexify()
                .iter()
                .map(|p| Point::try_from(p.as_slice()))
                .collect::<Result<Vec<_>, _>>()
                .map(PointDefinition::Keyframes),
        }
    }
}

impl From<PointDefinition> for RawPointDefinition {
    fn from(def: PointDefinition) -> Self {
        match def {
            PointDefinition::Constant(v) => {
                RawPointDefinition::Simple(v.into_iter().map(PointElement::Number).collect())
            }
            PointDefinition::Keyframes(points) => {
                RawPointDefinition::Complex(points.iter().map(Point::to_raw).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::{EasingCurve, EasingDirection};

    #[test]
    fn flags_decode_into_fields() {
        let raw: RawPoint =
            serde_json::from_str(r#"[1, 0, 0, 0.5, "lerpHSV", "easeInExpo", "splineCatmullRom"]"#)
                .unwrap();
        let p = Point::try_from(raw.as_slice()).unwrap();
        assert_eq!(p.values, vec![1.0, 0.0, 0.0]);
        assert_eq!(p.time, 0.5);
        assert_eq!(
            p.easing,
            Some(Easing::curve(EasingCurve::Expo, EasingDirection::In))
        );
        assert_eq!(p.spline, Some(Spline::CatmullRom));
        assert!(p.hsv_lerp);
        // Canonical flag order on the way out.
        assert_eq!(
            serde_json::to_string(&p.to_raw()).unwrap(),
            r#"[1.0,0.0,0.0,0.5,"easeInExpo","splineCatmullRom","lerpHSV"]"#
        );
    }

    #[test]
    fn runtime_points_become_tokens() {
        let raw: RawPointDefinition =
            serde_json::from_str(r#"[["baseCombo", 0], [1, 1]]"#).unwrap();
        assert!(matches!(
            PointDefinition::try_from(raw.clone()),
            Err(PointError::RuntimeValue(name)) if name == "baseCombo"
        ));
        let decoded = PointOrToken::decode_all(raw).unwrap();
        assert!(matches!(&decoded[0], PointOrToken::Token(t) if t.time() == Some(0.0)));
        assert_eq!(decoded[1].as_point().map(|p| p.time), Some(1.0));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let raw: RawPoint = serde_json::from_str(r#"[1, 0.5, "wobble"]"#).unwrap();
        assert_eq!(
            Point::try_from(raw.as_slice()),
            Err(PointError::UnknownFlag("wobble".into()))
        );
    }

    #[test]
    fn serde_goes_through_the_wire_shape() {
        let def: PointDefinition = serde_json::from_str("[[0, 0], [10, 1, \"easeOutQuad\"]]").unwrap();
        let PointDefinition::Keyframes(points) = &def else {
            panic!("expected keyframes");
        };
        assert_eq!(points.len(), 2);
        let constant: PointDefinition = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(constant, PointDefinition::Constant(vec![1.0, 2.0, 3.0]));
        assert_eq!(serde_json::to_string(&constant).unwrap(), "[1.0,2.0,3.0]");
    }
}
