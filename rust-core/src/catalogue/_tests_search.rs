#[cfg(test)]
mod _tests_search {
    use super::super::catalogue_builder::build_catalogue;
    use super::super::frequency_node::FrequencyNode;
    use super::super::search::*;

    #[test]
    fn test_named_ranges_on_catalogue() {
        let node = build_catalogue().to_node();
        let counts: Vec<usize> = NAMED_RANGES
            .iter()
            .map(|&(min, max, _)| find_frequencies_in_range(&node, min, max).len())
            .collect();
        assert_eq!(counts, vec![114, 8, 14, 40]);
    }

    #[test]
    fn test_matches_sorted_ascending_with_paths() {
        let node = build_catalogue().to_node();

        let near_daily = find_frequencies_in_range(&node, 0.9, 1.1);
        assert_eq!(near_daily[0].path, "tides.145_545");
        assert_eq!(near_daily[1].path, "tides.OO_1");
        assert_eq!(near_daily.last().unwrap().path, "gps.ground_repeat_frequency");
        assert!(near_daily.windows(2).all(|pair| pair[0].frequency <= pair[1].frequency));

        let long_period = find_frequencies_in_range(&node, 0.0, 0.1);
        assert_eq!(long_period[0].path, "gps.orbital_signals.n-2_m1.frequency_cpd");
        assert_eq!(long_period[1].path, "gps.orbital_signals.n-2_m1.aliased_frequency_cpd");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let tree: FrequencyNode = [
            ("low", FrequencyNode::Value(0.5)),
            ("mid", FrequencyNode::Value(0.75)),
            ("high", FrequencyNode::Value(1.0)),
            ("out", FrequencyNode::Value(1.0001)),
        ]
        .into_iter()
        .collect();

        let matches = find_frequencies_in_range(&tree, 0.5, 1.0);
        let paths: Vec<&str> = matches.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["low", "mid", "high"]);
        assert_eq!(matches[0].period_days(), 2.0);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let node = build_catalogue().to_node();
        assert!(find_frequencies_in_range(&node, 2.0, 1.0).is_empty());
    }
}
