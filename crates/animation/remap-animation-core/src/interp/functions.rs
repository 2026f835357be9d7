//! Interpolation helpers:
//! - lerp / inverse_lerp (scalars) and lerp_values (component-wise)
//! - lerp_wrap (shortest path on a 0..1 circle, used for hue)
//! - lerp_hsv (RGB(A) endpoints blended in HSV space)
//! - catmull_rom (4-point cubic spline)
//! - lerp_rotation (quaternion slerp between Euler endpoints)

use crate::color::{hsv_to_rgb, rgb_to_hsv};
use crate::transform::{slerp_euler, vec3_from_slice};

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `x` between `a` and `b`; 0 when the span is empty.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        0.0
    } else {
        (x - a) / span
    }
}

/// Component-wise lerp over the shorter of the two vectors.
pub fn lerp_values(a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(a, b)| lerp(*a, *b, t)).collect()
}

/// Lerp on the unit circle [0, 1), crossing the 0/1 seam when that is shorter.
pub fn lerp_wrap(a: f64, b: f64, t: f64) -> f64 {
    if (b - a).abs() < 0.5 {
        return lerp(a, b, t);
    }
    let a = if b > a { a + 1.0 } else { a - 1.0 };
    lerp(a, b, t).rem_euclid(1.0)
}

/// Blend two RGB(A) colors through HSV. Hue takes the short way round;
/// saturation, value and alpha blend linearly.
pub fn lerp_hsv(a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    let ha = rgb_to_hsv(a);
    let hb = rgb_to_hsv(b);
    let mut out = lerp_values(&ha, &hb, t);
    if let (Some(h0), Some(h1), Some(h)) = (ha.first(), hb.first(), out.first_mut()) {
        *h = lerp_wrap(*h0, *h1, t);
    }
    hsv_to_rgb(&out)
}

/// Slerp between two Euler rotations in degrees. Falls back to a plain
/// component lerp when either side is not three-dimensional.
pub fn lerp_rotation(a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    match (vec3_from_slice(a), vec3_from_slice(b)) {
        (Some(a), Some(b)) => slerp_euler(a, b, t).to_vec(),
        _ => lerp_values(a, b, t),
    }
}

/// Catmull-Rom evaluation between `p1` (t = 0) and `p2` (t = 1), with `p0`
/// and `p3` as the outer neighbours. Callers duplicate an end point when a
/// neighbour is missing.
pub fn catmull_rom(p0: &[f64], p1: &[f64], p2: &[f64], p3: &[f64], t: f64) -> Vec<f64> {
    let tt = t * t;
    let ttt = tt * t;
    let q0 = -ttt + 2.0 * tt - t;
    let q1 = 3.0 * ttt - 5.0 * tt + 2.0;
    let q2 = -3.0 * ttt + 4.0 * tt + t;
    let q3 = ttt - tt;

    (0..p1.len())
        .map(|i| {
            let c = |p: &[f64]| p.get(i).copied().unwrap_or(p1[i]);
            0.5 * (c(p0) * q0 + p1[i] * q1 + c(p2) * q2 + c(p3) * q3)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn inverse_lerp_guards_empty_span() {
        assert_eq!(inverse_lerp(0.5, 0.5, 0.5), 0.0);
        assert_eq!(inverse_lerp(0.0, 2.0, 0.5), 0.25);
    }

    #[test]
    fn hue_wraps_across_red() {
        assert_abs_diff_eq!(lerp_wrap(0.875, 0.125, 0.5), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lerp_wrap(0.125, 0.875, 0.25), 0.0625, epsilon = 1e-12);
        assert_abs_diff_eq!(lerp_wrap(0.2, 0.4, 0.5), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn hsv_lerp_passes_through_saturated_hues() {
        // Red to green via HSV goes through yellow, not muddy olive.
        let mid = lerp_hsv(&[1.0, 0.0, 0.0, 1.0], &[0.0, 1.0, 0.0, 0.5], 0.5);
        assert_abs_diff_eq!(mid[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[2], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[3], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn catmull_rom_hits_the_control_points() {
        let (p0, p1, p2, p3) = ([0.0], [10.0], [20.0], [15.0]);
        assert_abs_diff_eq!(catmull_rom(&p0, &p1, &p2, &p3, 0.0)[0], 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(catmull_rom(&p0, &p1, &p2, &p3, 1.0)[0], 20.0, epsilon = 1e-12);
        let mid = catmull_rom(&p0, &p1, &p2, &p3, 0.5)[0];
        assert!(mid > 10.0 && mid < 20.0, "mid {mid}");
    }

    #[test]
    fn catmull_rom_on_a_line_is_linear() {
        let v = catmull_rom(&[0.0, 5.0], &[1.0, 5.0], &[2.0, 5.0], &[3.0, 5.0], 0.25);
        assert_abs_diff_eq!(v[0], 1.25, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1], 5.0, epsilon = 1e-12);
    }
}
