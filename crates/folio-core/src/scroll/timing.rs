//! L4 Atomic Layer: Time calculation utilities for scroll animations
//!
//! Timestamps are host frame timestamps in milliseconds (the browser's
//! `requestAnimationFrame` clock, or a monotonic clock in the TUI).

/// Milliseconds between an animation epoch and the current frame
#[inline]
pub fn elapsed_ms(epoch: f64, now: f64) -> f64 {
    (now - epoch).max(0.0)
}

/// Calculate animation progress (0.0 to 1.0)
#[inline]
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(elapsed: f64, duration: f64) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Convert a fractional scroll offset into a terminal row offset
#[inline]
pub fn to_rows(offset: f64, max: u16) -> u16 {
    offset.round().clamp(0.0, max as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(10.0, 0.0) - 1.0).abs() < 0.001);
        assert!((progress(400.0, 800.0) - 0.5).abs() < 0.001);
        assert!((progress(900.0, 800.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_elapsed_never_negative() {
        assert_eq!(elapsed_ms(100.0, 50.0), 0.0);
        assert_eq!(elapsed_ms(100.0, 116.5), 16.5);
        assert!(is_complete(800.0, 800.0));
        assert!(!is_complete(799.9, 800.0));
    }

    #[test]
    fn test_to_rows_clamps() {
        assert_eq!(to_rows(-3.2, 10), 0);
        assert_eq!(to_rows(4.6, 10), 5);
        assert_eq!(to_rows(42.0, 10), 10);
    }
}
