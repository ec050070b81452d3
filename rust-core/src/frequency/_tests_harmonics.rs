#[cfg(test)]
mod _tests_harmonics {
    use super::super::harmonics::*;

    #[test]
    fn test_gps_draconitic_series() {
        let base = 0.0028453;
        let series = harmonics(base, 15);

        assert_eq!(series.len(), 15);
        for (&index, &frequency) in &series {
            assert_eq!(frequency, f64::from(index) * base);
        }
        assert_eq!(series.keys().copied().collect::<Vec<_>>(), (1..=15).collect::<Vec<u32>>());
        assert_eq!(series[&1], base);
    }

    #[test]
    fn test_series_is_strictly_increasing() {
        let series = harmonics(0.0027378, 12);
        let values: Vec<f64> = series.values().copied().collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_empty_and_single_series() {
        assert!(harmonics(0.5, 0).is_empty());

        let single = harmonics(0.5, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[&1], 0.5);
    }
}
