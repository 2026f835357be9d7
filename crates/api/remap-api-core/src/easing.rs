//! Easing and spline flag names.
//!
//! Easing flags on the wire are `easeLinear`, `easeStep`, or
//! `ease{In|Out|InOut}{Curve}` (for example `easeInOutQuad`). The curve math
//! lives in the animation core; this module only models the names.

use std::fmt;
use std::str::FromStr;

use crate::error::PointError;

/// Prefix shared by every easing flag.
pub const EASING_PREFIX: &str = "ease";
/// Prefix shared by every spline flag.
pub const SPLINE_PREFIX: &str = "spline";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EasingCurve {
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Elastic,
    Back,
    Bounce,
}

impl EasingCurve {
    pub const ALL: [EasingCurve; 10] = [
        EasingCurve::Quad,
        EasingCurve::Cubic,
        EasingCurve::Quart,
        EasingCurve::Quint,
        EasingCurve::Sine,
        EasingCurve::Expo,
        EasingCurve::Circ,
        EasingCurve::Elastic,
        EasingCurve::Back,
        EasingCurve::Bounce,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EasingCurve::Quad => "Quad",
            EasingCurve::Cubic => "Cubic",
            EasingCurve::Quart => "Quart",
            EasingCurve::Quint => "Quint",
            EasingCurve::Sine => "Sine",
            EasingCurve::Expo => "Expo",
            EasingCurve::Circ => "Circ",
            EasingCurve::Elastic => "Elastic",
            EasingCurve::Back => "Back",
            EasingCurve::Bounce => "Bounce",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EasingDirection {
    In,
    Out,
    InOut,
}

impl EasingDirection {
    pub fn name(self) -> &'static str {
        match self {
            EasingDirection::In => "In",
            EasingDirection::Out => "Out",
            EasingDirection::InOut => "InOut",
        }
    }
}

/// A named easing curve applied to the normalized progress of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    Step,
    Curve {
        curve: EasingCurve,
        direction: EasingDirection,
    },
}

impl Easing {
    pub const fn curve(curve: EasingCurve, direction: EasingDirection) -> Self {
        Easing::Curve { curve, direction }
    }

    /// Every easing with a wire name.
    pub fn all() -> Vec<Easing> {
        let mut out = vec![Easing::Linear, Easing::Step];
        for curve in EasingCurve::ALL {
            for direction in [
                EasingDirection::In,
                EasingDirection::Out,
                EasingDirection::InOut,
            ] {
                out.push(Easing::Curve { curve, direction });
            }
        }
        out
    }

    pub fn direction(self) -> Option<EasingDirection> {
        match self {
            Easing::Curve { direction, .. } => Some(direction),
            _ => None,
        }
    }

    /// The easing that traces this one backwards in time: `In` and `Out`
    /// swap, everything else is symmetric and stays put.
    pub fn reversed(self) -> Self {
        match self {
            Easing::Curve {
                curve,
                direction: EasingDirection::In,
            } => Easing::curve(curve, EasingDirection::Out),
            Easing::Curve {
                curve,
                direction: EasingDirection::Out,
            } => Easing::curve(curve, EasingDirection::In),
            other => other,
        }
    }

    pub fn name(self) -> String {
        match self {
            Easing::Linear => "easeLinear".to_string(),
            Easing::Step => "easeStep".to_string(),
            Easing::Curve { curve, direction } => {
                format!("{EASING_PREFIX}{}{}", direction.name(), curve.name())
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Easing {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PointError::UnknownEasing(s.to_string());
        let rest = s.strip_prefix(EASING_PREFIX).ok_or_else(unknown)?;
        match rest {
            "Linear" => return Ok(Easing::Linear),
            "Step" => return Ok(Easing::Step),
            _ => {}
        }
        // InOut must be tried before In.
        let (direction, curve_name) = if let Some(c) = rest.strip_prefix("InOut") {
            (EasingDirection::InOut, c)
        } else if let Some(c) = rest.strip_prefix("In") {
            (EasingDirection::In, c)
        } else if let Some(c) = rest.strip_prefix("Out") {
            (EasingDirection::Out, c)
        } else {
            return Err(unknown());
        };
        EasingCurve::ALL
            .into_iter()
            .find(|c| c.name() == curve_name)
            .map(|curve| Easing::Curve { curve, direction })
            .ok_or_else(unknown)
    }
}

/// Spline kinds a point may request for the segment ending at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spline {
    CatmullRom,
}

impl Spline {
    pub fn name(self) -> &'static str {
        match self {
            Spline::CatmullRom => "splineCatmullRom",
        }
    }
}

impl fmt::Display for Spline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Spline {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "splineCatmullRom" => Ok(Spline::CatmullRom),
            _ => Err(PointError::UnknownSpline(s.to_string())),
        }
    }
}
