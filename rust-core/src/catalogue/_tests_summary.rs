#[cfg(test)]
mod _tests_summary {
    use super::super::catalogue_builder::build_catalogue;
    use super::super::frequency_node::FrequencyNode;
    use super::super::summary::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_catalogue_statistics() {
        let summary = frequency_summary();
        let statistics = summary.statistics;

        assert_eq!(statistics.total_frequencies, 422);
        assert_relative_eq!(statistics.frequency_range.min_cpd, 4.1895906885414114e-05, max_relative = 1e-9);
        // orbital_period_hours leaves count as samples too
        assert_relative_eq!(statistics.frequency_range.max_cpd, 572848.3230030163, max_relative = 1e-9);
        assert_relative_eq!(statistics.frequency_range.max_period_days, 23868.68012512568, max_relative = 1e-9);
        assert_relative_eq!(statistics.frequency_range.min_period_days, 1.7456627868922547e-06, max_relative = 1e-9);
    }

    #[test]
    fn test_category_counts() {
        let summary = FrequencySummary::from_catalogue(&build_catalogue());

        let names: Vec<&str> = summary.categories.iter().map(|c| c.category).collect();
        assert_eq!(names, vec!["gps", "glonass", "galileo", "tides", "annual", "aliases"]);

        assert_eq!(
            summary.category("gps").unwrap().breakdown,
            CategoryBreakdown::Subcategories(vec![("draconitic_harmonics", 15), ("orbital_signals", 21)])
        );
        assert_eq!(
            summary.category("glonass").unwrap().breakdown,
            CategoryBreakdown::Subcategories(vec![
                ("draconitic_harmonics", 15),
                ("orbital_peaks", 30),
                ("orbital_signals", 21),
            ])
        );
        assert_eq!(summary.category("galileo").unwrap().total(), 66);
        assert_eq!(summary.category("tides").unwrap().total(), 8);
        assert_eq!(summary.category("annual").unwrap().total(), 12);
        assert_eq!(summary.category("aliases").unwrap().total(), 32);
        assert!(summary.category("earth").is_none());
    }

    #[test]
    fn test_statistics_ignore_non_positive_and_unbounded_leaves() {
        let tree: FrequencyNode = [
            ("negative", FrequencyNode::Value(-0.0001)),
            ("zero", FrequencyNode::Value(0.0)),
            ("unbounded", FrequencyNode::Value(f64::INFINITY)),
            ("low", FrequencyNode::Value(0.25)),
            ("high", FrequencyNode::Value(2.0)),
        ]
        .into_iter()
        .collect();

        let statistics = FrequencyStatistics::from_node(&tree);
        assert_eq!(statistics.total_frequencies, 2);
        assert_eq!(statistics.frequency_range.min_cpd, 0.25);
        assert_eq!(statistics.frequency_range.max_cpd, 2.0);
        assert_eq!(statistics.frequency_range.min_period_days, 0.5);
        assert_eq!(statistics.frequency_range.max_period_days, 4.0);
    }

    #[test]
    fn test_empty_tree_statistics_are_zero() {
        let statistics = FrequencyStatistics::from_node(&FrequencyNode::table());
        assert_eq!(statistics, FrequencyStatistics::default());
        assert_eq!(statistics.frequency_range.max_period_days, 0.0);
    }

    #[test]
    fn test_summary_json_shape() {
        let value = serde_json::to_value(frequency_summary()).unwrap();
        assert_eq!(value["total_frequencies"], 422);
        assert_eq!(value["categories"]["aliases"], 32);
        assert_eq!(value["categories"]["glonass"]["orbital_peaks"], 30);
        assert!(value["frequency_range"]["min_cpd"].is_f64());
    }
}
