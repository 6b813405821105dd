//! Basic functions shared by the waveform shapes.

use std::f64::consts::PI;

use crate::types::*;

/// Convert a frequency to the angular rate of a sine wave sampled at microsecond times, in
/// radians per microsecond.
pub fn angular_rate(frequency: Frequency) -> f64 {
    frequency * 2.0 * PI / MICROS_PER_SECOND
}

/// Convert a frequency to the length of one period in microseconds.
pub fn period_micros(frequency: Frequency) -> f64 {
    MICROS_PER_SECOND / frequency
}

/// Get the position of `time` within its period, in microseconds from the start of that period.
///
/// Periods are counted by flooring division, so the result lies in `[0, period)` for negative
/// times too and the waveform continues periodically before the epoch.
pub fn position_in_period(time: Time, period: f64) -> f64 {
    (time as f64).rem_euclid(period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angular_rate() {
        // One Hz should make a full turn every second.
        assert_relative_eq!(angular_rate(1.0) * MICROS_PER_SECOND, 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(angular_rate(50.0) * 20_000.0, 2.0 * PI, epsilon = 1e-12);
        assert_eq!(angular_rate(0.0), 0.0);
    }

    #[test]
    fn test_period_micros() {
        assert_eq!(period_micros(1.0), 1_000_000.0);
        assert_eq!(period_micros(4.0), 250_000.0);
        assert_eq!(period_micros(1000.0), 1000.0);
        assert_relative_eq!(period_micros(3.0), 333_333.333, epsilon = 0.001);

        // Zero frequency is not rejected, it just never repeats.
        assert!(period_micros(0.0).is_infinite());
    }

    #[test]
    fn test_position_in_period() {
        assert_eq!(position_in_period(0, 1000.0), 0.0);
        assert_eq!(position_in_period(999, 1000.0), 999.0);
        assert_eq!(position_in_period(1000, 1000.0), 0.0);
        assert_eq!(position_in_period(2500, 1000.0), 500.0);
    }

    #[test]
    fn test_position_in_period_negative_time() {
        // Negative times count back from the end of the previous period rather than mirroring
        // the positive side.
        assert_eq!(position_in_period(-1, 1000.0), 999.0);
        assert_eq!(position_in_period(-250, 1000.0), 750.0);
        assert_eq!(position_in_period(-1000, 1000.0), 0.0);
        assert_eq!(position_in_period(-2500, 1000.0), 500.0);

        for time in -5000..0 {
            let position = position_in_period(time, 1000.0);
            assert!((0.0..1000.0).contains(&position));
            assert_eq!(position, position_in_period(time + 1000, 1000.0));
        }
    }

    #[test]
    fn test_position_in_period_extreme_time() {
        let position = position_in_period(Time::MIN, 1_000_000.0);
        assert!((0.0..1_000_000.0).contains(&position));
        let position = position_in_period(Time::MAX, 1_000_000.0);
        assert!((0.0..1_000_000.0).contains(&position));
    }
}
