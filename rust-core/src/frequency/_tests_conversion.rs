#[cfg(test)]
mod _tests_conversion {
    use super::super::conversion::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_frequency_has_infinite_period() {
        assert_eq!(frequency_to_period(0.0), f64::INFINITY);
        assert_eq!(frequency_to_period(-0.0), f64::INFINITY);
    }

    #[test]
    fn test_zero_period_has_infinite_frequency() {
        assert_eq!(period_to_frequency(0.0), f64::INFINITY);
    }

    #[test]
    fn test_known_values() {
        assert_relative_eq!(frequency_to_period(2.0), 0.5);
        assert_relative_eq!(frequency_to_period(0.0028453), 351.45678838786773, epsilon = 1e-9);
        assert_relative_eq!(period_to_frequency(365.25), 0.0027378507871321013, epsilon = 1e-15);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for &f in &[1e-5, 0.0027378, 0.5, 1.0027378, 2.0057014, 4.011030333416897, 1234.5] {
            let back = period_to_frequency(frequency_to_period(f));
            assert!(
                (back - f).abs() <= 1e-12 * f.max(1.0),
                "round trip of {} gave {}",
                f,
                back
            );
        }
    }

    #[test]
    fn test_period_hours_to_frequency() {
        assert_relative_eq!(period_hours_to_frequency(12.0), 2.0);
        assert_relative_eq!(period_hours_to_frequency(24.0), 1.0);
        assert_relative_eq!(period_hours_to_frequency(5.9835), 4.011030333416897, epsilon = 1e-12);
        assert_eq!(period_hours_to_frequency(0.0), f64::INFINITY);
    }
}
