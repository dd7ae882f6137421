//! Timing curves for transitions
//!
//! CSS hosts apply the curve through the `transition` declaration. Native
//! renderers interpolate themselves and can call `Easing::sample`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A transition timing function
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Control points of a cubic bezier from (0, 0) to (1, 1)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Fast start with a long, soft tail. Used for both smooth slides and
    /// elastic snap-backs.
    pub const EASE_OUT_CIRC: Easing = Easing::CubicBezier(0.075, 0.82, 0.165, 1.0);

    /// Evaluate the curve at progress `t` (clamped to 0..=1)
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_curve_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EASE_OUT_CIRC
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// One axis of a cubic bezier anchored at 0 and 1
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`
///
/// Newton iterations converge in a few steps for well-behaved curves; bisection
/// catches the flat-slope cases.
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let error = bezier(s, x1, x2) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_derivative(s, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        s -= error / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}
