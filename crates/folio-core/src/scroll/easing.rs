//! L4 Atomic Layer: Pure easing functions for scroll animations
//!
//! Two shapes live here: normalized curves mapping progress [0, 1] to [0, 1],
//! and the classic `(t, b, c, d)` form used by the scroll driver.

pub use crate::config::EasingType;

/// Symmetric cubic ease-in-out in `(t, b, c, d)` form.
///
/// `t` is elapsed time, `b` the start value, `c` the total change and `d` the
/// duration. Accelerates over the first half of `d`, decelerates over the second.
/// `d` must be positive.
#[inline]
pub fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;

    /// Sample the curve at elapsed time `t` for a move of `c` starting at `b` over `d`
    fn sample(&self, t: f64, b: f64, c: f64, d: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::InOutCubic => ease_in_out_cubic(t, 0.0, 1.0, 1.0),
        }
    }

    #[inline]
    fn sample(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        match self {
            // Unclamped, so a late frame can run past `d` the same way the browser version does
            EasingType::InOutCubic => ease_in_out_cubic(t, b, c, d),
            other => b + c * other.apply(t / d),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}
