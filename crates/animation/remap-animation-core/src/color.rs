//! RGB(A) <-> HSV(A) conversion, all channels in 0..1.
//!
//! Only what HSV interpolation needs; alpha and any extra channels pass
//! through untouched.

/// RGB to HSV. Inputs shorter than three channels are returned as-is.
pub fn rgb_to_hsv(color: &[f64]) -> Vec<f64> {
    if color.len() < 3 {
        return color.to_vec();
    }
    let (r, g, b) = (color[0], color[1], color[2]);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };
    let s = if max == 0.0 { 0.0 } else { d / max };

    let mut out = vec![h, s, max];
    out.extend_from_slice(&color[3..]);
    out
}

/// HSV to RGB. Hue wraps into 0..1.
pub fn hsv_to_rgb(color: &[f64]) -> Vec<f64> {
    if color.len() < 3 {
        return color.to_vec();
    }
    let (h, s, v) = (color[0].rem_euclid(1.0), color[1], color[2]);
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match i as i64 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    let mut out = vec![r, g, b];
    out.extend_from_slice(&color[3..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn primaries_map_to_expected_hues() {
        assert_eq!(rgb_to_hsv(&[1.0, 0.0, 0.0]), vec![0.0, 1.0, 1.0]);
        assert_abs_diff_eq!(rgb_to_hsv(&[0.0, 1.0, 0.0])[0], 1.0 / 3.0);
        assert_abs_diff_eq!(rgb_to_hsv(&[0.0, 0.0, 1.0])[0], 2.0 / 3.0);
    }

    #[test]
    fn conversion_round_trips_with_alpha() {
        let rgba = [0.2, 0.6, 0.4, 0.5];
        let back = hsv_to_rgb(&rgb_to_hsv(&rgba));
        for (a, b) in rgba.iter().zip(&back) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }
}
