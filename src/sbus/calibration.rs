//! # Value Calibration
//!
//! Maps normalized control inputs to SBUS channel values.
//!
//! Control axes arrive as real numbers in [-1.0, 1.0] with 0.0 as the
//! neutral (center) position. The calibrator clamps out-of-range inputs and
//! applies the affine map onto the 11-bit SBUS range:
//!
//! ```text
//! -1.0 -> 0
//!  0.0 -> 1024
//!  1.0 -> 2047
//! ```

use super::protocol::SBUS_CHANNEL_VALUE_MAX;

/// Map a normalized input in [-1.0, 1.0] to an SBUS channel value.
///
/// Out-of-range inputs are clamped, never rejected; calibration is total
/// over the real line. Rounds half away from zero, so the neutral input 0.0
/// lands exactly on 1024.
///
/// This is a pure function and safe to call concurrently.
///
/// # Arguments
///
/// * `value` - Normalized input (-1.0 to 1.0; anything else is clamped)
///
/// # Returns
///
/// * `u16` - Channel value in 0-2047
///
/// # Examples
///
/// ```
/// use sbus_bridge::sbus::calibration::calibrate;
///
/// assert_eq!(calibrate(-1.0), 0);
/// assert_eq!(calibrate(0.0), 1024);
/// assert_eq!(calibrate(1.0), 2047);
/// assert_eq!(calibrate(5.0), 2047); // clamped
/// ```
#[must_use]
pub fn calibrate(value: f32) -> u16 {
    let clamped = value.clamp(-1.0, 1.0);
    ((clamped + 1.0) / 2.0 * SBUS_CHANNEL_VALUE_MAX as f32).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbus::protocol::{SBUS_CHANNEL_VALUE_MIN, SBUS_CHANNEL_VALUE_NEUTRAL};

    #[test]
    fn test_calibrate_endpoints() {
        assert_eq!(calibrate(-1.0), SBUS_CHANNEL_VALUE_MIN);
        assert_eq!(calibrate(0.0), SBUS_CHANNEL_VALUE_NEUTRAL);
        assert_eq!(calibrate(1.0), SBUS_CHANNEL_VALUE_MAX);
    }

    #[test]
    fn test_calibrate_half_throttle() {
        // (0.5 + 1) / 2 * 2047 = 1535.25 -> 1535
        assert_eq!(calibrate(0.5), 1535);
        // (-0.5 + 1) / 2 * 2047 = 511.75 -> 512
        assert_eq!(calibrate(-0.5), 512);
    }

    #[test]
    fn test_calibrate_clamps_out_of_range() {
        assert_eq!(calibrate(-2.0), calibrate(-1.0));
        assert_eq!(calibrate(2.0), calibrate(1.0));
        assert_eq!(calibrate(f32::NEG_INFINITY), 0);
        assert_eq!(calibrate(f32::INFINITY), 2047);
        assert_eq!(calibrate(1000.0), 2047);
        assert_eq!(calibrate(-1000.0), 0);
    }

    #[test]
    fn test_calibrate_always_in_range() {
        let inputs = [-10.0, -1.0, -0.999, -0.5, -0.001, 0.0, 0.001, 0.5, 0.999, 1.0, 10.0];
        for &v in &inputs {
            let out = calibrate(v);
            assert!(out <= SBUS_CHANNEL_VALUE_MAX, "calibrate({}) = {} out of range", v, out);
        }
    }

    #[test]
    fn test_calibrate_is_monotonic() {
        let mut prev = calibrate(-1.0);
        let mut v = -1.0f32;
        while v <= 1.0 {
            let out = calibrate(v);
            assert!(out >= prev, "calibrate not monotonic at {}", v);
            prev = out;
            v += 0.01;
        }
    }

    #[test]
    fn test_calibrate_is_pure() {
        for &v in &[-1.0, -0.3, 0.0, 0.7, 1.0] {
            assert_eq!(calibrate(v), calibrate(v));
        }
    }
}
