//! Accessors and mutators for points in their flexible wire form.
//!
//! The time value of a point is its right-most number; anything after it is a
//! string flag (easing, spline, `lerpHSV`). Lookups that fail return `None`
//! instead of erroring so callers can keep going over partially valid data.

use crate::easing::{Easing, Spline, EASING_PREFIX, SPLINE_PREFIX};
use crate::element::{PointElement, RawPoint};
use crate::error::PointError;

/// Flag enabling HSV color interpolation for the segment ending at a point.
pub const HSV_LERP_FLAG: &str = "lerpHSV";

/// How a flag key is compared against the strings stored in a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagMatch {
    /// The stored flag must equal the key.
    Exact,
    /// The stored flag must contain the key (used for classification, e.g.
    /// any flag containing `ease` is an easing).
    Contains,
}

impl FlagMatch {
    #[inline]
    fn matches(self, stored: &str, key: &str) -> bool {
        match self {
            FlagMatch::Exact => stored == key,
            FlagMatch::Contains => stored.contains(key),
        }
    }
}

/// Index of the time value: the last numeric slot.
pub fn time_index(point: &[PointElement]) -> Option<usize> {
    point.iter().rposition(PointElement::is_number)
}

pub fn time(point: &[PointElement]) -> Option<f64> {
    time_index(point).and_then(|i| point[i].as_number())
}

/// The value slots, everything before the time index.
pub fn values(point: &[PointElement]) -> Option<&[PointElement]> {
    time_index(point).map(|i| &point[..i])
}

/// The value slots as numbers; `None` when any slot is not numeric.
pub fn numeric_values(point: &[PointElement]) -> Option<Vec<f64>> {
    values(point)?.iter().map(PointElement::as_number).collect()
}

/// True when anything trails the time value.
pub fn has_flags(point: &[PointElement]) -> bool {
    match time_index(point) {
        Some(i) => point.len() > i + 1,
        None => false,
    }
}

/// Right-to-left search through the flag slots for a matching string.
pub fn find_flag(point: &[PointElement], key: &str, matching: FlagMatch) -> Option<usize> {
    let start = time_index(point).map(|i| i + 1).unwrap_or(0);
    (start..point.len())
        .rev()
        .find(|&i| matches!(point[i].as_text(), Some(s) if matching.matches(s, key)))
}

fn flag<'a>(point: &'a [PointElement], key: &str, matching: FlagMatch) -> Option<&'a str> {
    find_flag(point, key, matching).and_then(|i| point[i].as_text())
}

/// The easing flag, if present and recognised.
pub fn easing(point: &[PointElement]) -> Option<Easing> {
    flag(point, EASING_PREFIX, FlagMatch::Contains).and_then(|s| s.parse().ok())
}

/// The spline flag, if present and recognised.
pub fn spline(point: &[PointElement]) -> Option<Spline> {
    flag(point, SPLINE_PREFIX, FlagMatch::Contains).and_then(|s| s.parse().ok())
}

pub fn has_hsv_lerp(point: &[PointElement]) -> bool {
    find_flag(point, HSV_LERP_FLAG, FlagMatch::Exact).is_some()
}

pub fn set_time(point: &mut RawPoint, time: f64) -> Result<(), PointError> {
    let i = time_index(point).ok_or(PointError::MissingTime)?;
    point[i] = PointElement::Number(time);
    Ok(())
}

/// Replace the value slots in front of the time index. The point grows or
/// shrinks when the new arity differs.
pub fn set_values(point: &mut RawPoint, new_values: &[f64]) -> Result<(), PointError> {
    let i = time_index(point).ok_or(PointError::MissingTime)?;
    point.splice(..i, new_values.iter().copied().map(PointElement::Number));
    Ok(())
}

/// Find-or-append a flag slot.
///
/// The slot is located with `old` if given, otherwise with `value`. Passing
/// `None` as `value` removes the located slot and compacts the point.
pub fn set_flag(
    point: &mut RawPoint,
    value: Option<&str>,
    old: Option<&str>,
    matching: FlagMatch,
) -> Result<(), PointError> {
    let key = old.or(value).ok_or(PointError::AmbiguousFlag)?;
    match (find_flag(point, key, matching), value) {
        (Some(i), Some(v)) => point[i] = PointElement::Text(v.to_string()),
        (Some(i), None) => {
            point.remove(i);
        }
        (None, Some(v)) => point.push(PointElement::Text(v.to_string())),
        (None, None) => {}
    }
    Ok(())
}

pub fn set_easing(point: &mut RawPoint, easing: Option<Easing>) -> Result<(), PointError> {
    let name = easing.map(Easing::name);
    set_flag(
        point,
        name.as_deref(),
        Some(EASING_PREFIX),
        FlagMatch::Contains,
    )
}

pub fn set_spline(point: &mut RawPoint, spline: Option<Spline>) -> Result<(), PointError> {
    set_flag(
        point,
        spline.map(Spline::name),
        Some(SPLINE_PREFIX),
        FlagMatch::Contains,
    )
}

pub fn set_hsv_lerp(point: &mut RawPoint, enabled: bool) -> Result<(), PointError> {
    set_flag(
        point,
        enabled.then_some(HSV_LERP_FLAG),
        Some(HSV_LERP_FLAG),
        FlagMatch::Exact,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::{EasingCurve, EasingDirection};
    use crate::element::raw_from_numbers;

    fn raw(json: &str) -> RawPoint {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn time_is_last_number_past_flags() {
        let p = raw(r#"[1, 2, 3, 0.5, "easeInQuad", "lerpHSV"]"#);
        assert_eq!(time_index(&p), Some(3));
        assert_eq!(time(&p), Some(0.5));
        assert_eq!(numeric_values(&p), Some(vec![1.0, 2.0, 3.0]));
        assert!(has_flags(&p));
    }

    #[test]
    fn malformed_point_yields_none() {
        let p = raw(r#"["baseCombo"]"#);
        assert_eq!(time_index(&p), None);
        assert_eq!(time(&p), None);
        assert!(values(&p).is_none());
    }

    #[test]
    fn flags_are_classified() {
        let p = raw(r#"[0, 1, "splineCatmullRom", "easeOutBounce"]"#);
        assert_eq!(
            easing(&p),
            Some(Easing::curve(EasingCurve::Bounce, EasingDirection::Out))
        );
        assert_eq!(spline(&p), Some(Spline::CatmullRom));
        assert!(!has_hsv_lerp(&p));
    }

    #[test]
    fn setting_and_removing_flags_compacts() {
        let mut p = raw_from_numbers(&[1.0, 0.25]);
        set_easing(&mut p, Some(Easing::Step)).unwrap();
        set_hsv_lerp(&mut p, true).unwrap();
        assert_eq!(p.len(), 4);
        set_easing(&mut p, Some(Easing::Linear)).unwrap();
        assert_eq!(p[2], PointElement::Text("easeLinear".into()));
        set_easing(&mut p, None).unwrap();
        assert_eq!(p.len(), 3);
        assert!(has_hsv_lerp(&p));
        assert_eq!(p[2], PointElement::Text(HSV_LERP_FLAG.into()));
    }

    #[test]
    fn ambiguous_flag_edit_is_an_error() {
        let mut p = raw_from_numbers(&[1.0, 0.0]);
        assert_eq!(
            set_flag(&mut p, None, None, FlagMatch::Exact),
            Err(PointError::AmbiguousFlag)
        );
    }

    #[test]
    fn values_and_time_are_replaced_in_place() {
        let mut p = raw(r#"[1, 2, 0.5, "easeInSine"]"#);
        set_values(&mut p, &[7.0, 8.0, 9.0]).unwrap();
        set_time(&mut p, 0.75).unwrap();
        assert_eq!(numeric_values(&p), Some(vec![7.0, 8.0, 9.0]));
        assert_eq!(time(&p), Some(0.75));
        assert!(easing(&p).is_some());
    }
}
