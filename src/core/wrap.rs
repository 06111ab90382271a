/// Wraps `value` into `[0, modulus)`.
///
/// A non-positive or non-finite modulus collapses the result to `0`, which is
/// the resting position of an unmeasured strip. Non-finite values also
/// collapse to `0` so a bad frame can never poison the stored position.
#[must_use]
pub fn wrap_offset(value: f64, modulus: f64) -> f64 {
    if !modulus.is_finite() || modulus <= 0.0 || !value.is_finite() {
        return 0.0;
    }

    ((value % modulus) + modulus) % modulus
}

/// Maps scroll speed onto the playback multiplier.
///
/// `max(1, 1 + speed / divisor)`, optionally capped at `max_multiplier`.
/// Idle scroll therefore never drops below the resting pace.
#[must_use]
pub fn speed_multiplier(speed: f64, divisor: f64, max_multiplier: Option<f64>) -> f64 {
    let speed = if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        0.0
    };
    if !divisor.is_finite() || divisor <= 0.0 {
        return 1.0;
    }

    let floored = (1.0 + speed / divisor).max(1.0);
    match max_multiplier {
        Some(cap) if cap.is_finite() => floored.min(cap.max(1.0)),
        _ => floored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negative_and_overflowing_values() {
        assert_eq!(wrap_offset(250.0, 200.0), 50.0);
        assert_eq!(wrap_offset(-50.0, 200.0), 150.0);
        assert_eq!(wrap_offset(200.0, 200.0), 0.0);
        assert_eq!(wrap_offset(-1e-18, 200.0), 0.0);
    }

    #[test]
    fn wrap_with_zero_modulus_is_zero() {
        assert_eq!(wrap_offset(42.0, 0.0), 0.0);
        assert_eq!(wrap_offset(42.0, -3.0), 0.0);
        assert_eq!(wrap_offset(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn multiplier_floors_at_one_and_respects_cap() {
        assert_eq!(speed_multiplier(0.0, 55.0, None), 1.0);
        assert_eq!(speed_multiplier(-10.0, 55.0, None), 1.0);
        assert_eq!(speed_multiplier(f64::NAN, 55.0, None), 1.0);
        assert_eq!(speed_multiplier(110.0, 55.0, None), 3.0);
        assert_eq!(speed_multiplier(1_000.0, 100.0, Some(5.0)), 5.0);
        assert_eq!(speed_multiplier(100.0, 100.0, Some(0.5)), 1.0);
    }
}
