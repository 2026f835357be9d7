//! Easing curves.
//!
//! Each curve maps normalized segment progress in [0,1] onto eased progress
//! with `f(0) = 0` and `f(1) = 1`. Elastic and back curves overshoot.

use std::f64::consts::PI;

use remap_api_core::{Easing, EasingCurve, EasingDirection};

/// Apply an easing to normalized progress. `None` is linear.
pub fn apply_easing(easing: Option<Easing>, t: f64) -> f64 {
    match easing {
        None | Some(Easing::Linear) => t,
        Some(Easing::Step) => {
            if t >= 1.0 {
                1.0
            } else {
                0.0
            }
        }
        Some(Easing::Curve { curve, direction }) => match direction {
            EasingDirection::In => ease_in(curve, t),
            EasingDirection::Out => ease_out(curve, t),
            EasingDirection::InOut => ease_in_out(curve, t),
        },
    }
}

fn ease_in(curve: EasingCurve, p: f64) -> f64 {
    match curve {
        EasingCurve::Quad => p * p,
        EasingCurve::Cubic => p * p * p,
        EasingCurve::Quart => p * p * p * p,
        EasingCurve::Quint => p * p * p * p * p,
        EasingCurve::Sine => ((p - 1.0) * PI / 2.0).sin() + 1.0,
        EasingCurve::Circ => 1.0 - (1.0 - p * p).sqrt(),
        EasingCurve::Expo => {
            if p == 0.0 {
                0.0
            } else {
                2f64.powf(10.0 * (p - 1.0))
            }
        }
        EasingCurve::Elastic => (13.0 * PI / 2.0 * p).sin() * 2f64.powf(10.0 * (p - 1.0)),
        EasingCurve::Back => p * p * p - p * (p * PI).sin(),
        EasingCurve::Bounce => 1.0 - bounce_out(1.0 - p),
    }
}

fn ease_out(curve: EasingCurve, p: f64) -> f64 {
    match curve {
        EasingCurve::Quad => -(p * (p - 2.0)),
        EasingCurve::Cubic => {
            let f = p - 1.0;
            f * f * f + 1.0
        }
        EasingCurve::Quart => {
            let f = p - 1.0;
            f * f * f * (1.0 - p) + 1.0
        }
        EasingCurve::Quint => {
            let f = p - 1.0;
            f * f * f * f * f + 1.0
        }
        EasingCurve::Sine => (p * PI / 2.0).sin(),
        EasingCurve::Circ => ((2.0 - p) * p).sqrt(),
        EasingCurve::Expo => {
            if p == 1.0 {
                1.0
            } else {
                1.0 - 2f64.powf(-10.0 * p)
            }
        }
        EasingCurve::Elastic => {
            (-13.0 * PI / 2.0 * (p + 1.0)).sin() * 2f64.powf(-10.0 * p) + 1.0
        }
        EasingCurve::Back => {
            let f = 1.0 - p;
            1.0 - (f * f * f - f * (f * PI).sin())
        }
        EasingCurve::Bounce => bounce_out(p),
    }
}

fn ease_in_out(curve: EasingCurve, p: f64) -> f64 {
    match curve {
        EasingCurve::Quad => {
            if p < 0.5 {
                2.0 * p * p
            } else {
                -2.0 * p * p + 4.0 * p - 1.0
            }
        }
        EasingCurve::Cubic => {
            if p < 0.5 {
                4.0 * p * p * p
            } else {
                let f = 2.0 * p - 2.0;
                0.5 * f * f * f + 1.0
            }
        }
        EasingCurve::Quart => {
            if p < 0.5 {
                8.0 * p * p * p * p
            } else {
                let f = p - 1.0;
                -8.0 * f * f * f * f + 1.0
            }
        }
        EasingCurve::Quint => {
            if p < 0.5 {
                16.0 * p * p * p * p * p
            } else {
                let f = 2.0 * p - 2.0;
                0.5 * f * f * f * f * f + 1.0
            }
        }
        EasingCurve::Sine => 0.5 * (1.0 - (p * PI).cos()),
        EasingCurve::Circ => {
            if p < 0.5 {
                0.5 * (1.0 - (1.0 - 4.0 * p * p).sqrt())
            } else {
                0.5 * ((-(2.0 * p - 3.0) * (2.0 * p - 1.0)).sqrt() + 1.0)
            }
        }
        EasingCurve::Expo => {
            if p == 0.0 || p == 1.0 {
                p
            } else if p < 0.5 {
                0.5 * 2f64.powf(20.0 * p - 10.0)
            } else {
                -0.5 * 2f64.powf(-20.0 * p + 10.0) + 1.0
            }
        }
        EasingCurve::Elastic => {
            if p < 0.5 {
                0.5 * (13.0 * PI / 2.0 * (2.0 * p)).sin() * 2f64.powf(10.0 * (2.0 * p - 1.0))
            } else {
                0.5 * ((-13.0 * PI / 2.0 * (2.0 * p - 1.0 + 1.0)).sin()
                    * 2f64.powf(-10.0 * (2.0 * p - 1.0))
                    + 2.0)
            }
        }
        EasingCurve::Back => {
            if p < 0.5 {
                let f = 2.0 * p;
                0.5 * (f * f * f - f * (f * PI).sin())
            } else {
                let f = 1.0 - (2.0 * p - 1.0);
                0.5 * (1.0 - (f * f * f - f * (f * PI).sin())) + 0.5
            }
        }
        EasingCurve::Bounce => {
            if p < 0.5 {
                0.5 * ease_in(EasingCurve::Bounce, p * 2.0)
            } else {
                0.5 * bounce_out(p * 2.0 - 1.0) + 0.5
            }
        }
    }
}

fn bounce_out(p: f64) -> f64 {
    if p < 4.0 / 11.0 {
        121.0 * p * p / 16.0
    } else if p < 8.0 / 11.0 {
        363.0 / 40.0 * p * p - 99.0 / 10.0 * p + 17.0 / 5.0
    } else if p < 9.0 / 10.0 {
        4356.0 / 361.0 * p * p - 35442.0 / 1805.0 * p + 16061.0 / 1805.0
    } else {
        54.0 / 5.0 * p * p - 513.0 / 25.0 * p + 268.0 / 25.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn every_curve_pins_both_ends() {
        for easing in Easing::all() {
            assert_abs_diff_eq!(apply_easing(Some(easing), 0.0), 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!(apply_easing(Some(easing), 1.0), 1.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn step_holds_until_the_end() {
        assert_eq!(apply_easing(Some(Easing::Step), 0.999), 0.0);
        assert_eq!(apply_easing(Some(Easing::Step), 1.0), 1.0);
    }

    #[test]
    fn in_out_pairs_are_mirror_images() {
        for curve in EasingCurve::ALL {
            for t in [0.1, 0.3, 0.5, 0.8] {
                let a = ease_in(curve, t);
                let b = 1.0 - ease_out(curve, 1.0 - t);
                assert_abs_diff_eq!(a, b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn ease_in_quad_lags_linear() {
        let e: Easing = "easeInQuad".parse().unwrap();
        assert_abs_diff_eq!(apply_easing(Some(e), 0.5), 0.25);
    }
}
