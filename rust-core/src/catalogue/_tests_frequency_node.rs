#[cfg(test)]
mod _tests_frequency_node {
    use super::super::catalogue_builder::build_catalogue;
    use super::super::frequency_node::*;

    fn sample_tree() -> FrequencyNode {
        let inner: FrequencyNode = [("b", FrequencyNode::Value(2.0)), ("c", FrequencyNode::Value(-3.0))]
            .into_iter()
            .collect();
        [("a", FrequencyNode::Value(1.0)), ("nested", inner), ("z", FrequencyNode::table())]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lookup() {
        let tree = sample_tree();
        assert!(tree.is_table());
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get("a").and_then(FrequencyNode::as_value), Some(1.0));
        assert_eq!(tree.value_at(&["nested", "c"]), Some(-3.0));
        assert!(tree.get_path(&["nested", "missing"]).is_none());
        assert!(tree.get_path(&["a", "deeper"]).is_none());
        assert_eq!(tree.get_path(&[]), Some(&tree));
        assert!(tree.get("z").unwrap().is_empty());
    }

    #[test]
    fn test_leaf_has_no_children() {
        let leaf = FrequencyNode::from(0.5);
        assert!(!leaf.is_table());
        assert_eq!(leaf.len(), 0);
        assert!(leaf.get("a").is_none());
        assert_eq!(leaf.as_value(), Some(0.5));
    }

    #[test]
    fn test_leaves_use_dotted_paths_in_order() {
        let leaves = sample_tree().leaves();
        assert_eq!(
            leaves,
            vec![
                ("a".to_string(), 1.0),
                ("nested.b".to_string(), 2.0),
                ("nested.c".to_string(), -3.0),
            ]
        );
    }

    #[test]
    fn test_json_preserves_key_order() {
        let json = serde_json::to_string(&sample_tree()).unwrap();
        assert_eq!(json, r#"{"a":1.0,"nested":{"b":2.0,"c":-3.0},"z":{}}"#);
    }

    #[test]
    fn test_json_read_back() {
        let json = r#"{"x": 3, "y": {"2": 0.25, "1": -1}, "inf": null}"#;
        let tree: FrequencyNode = serde_json::from_str(json).unwrap();

        assert_eq!(tree.value_at(&["x"]), Some(3.0));
        assert_eq!(tree.value_at(&["y", "1"]), Some(-1.0));
        assert_eq!(tree.value_at(&["inf"]), Some(f64::INFINITY));
        let keys: Vec<&str> = tree.get("y").unwrap().entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["2", "1"]);
    }

    #[test]
    fn test_non_finite_values_written_as_null() {
        let tree: FrequencyNode = [("period", FrequencyNode::Value(f64::INFINITY))].into_iter().collect();
        assert_eq!(serde_json::to_string(&tree).unwrap(), r#"{"period":null}"#);
    }

    #[test]
    fn test_rejects_non_numeric_leaves() {
        assert!(serde_json::from_str::<FrequencyNode>(r#"{"a": "fast"}"#).is_err());
        assert!(serde_json::from_str::<FrequencyNode>(r#"{"a": [1, 2]}"#).is_err());
        assert!(serde_json::from_str::<FrequencyNode>(r#"{"a": true}"#).is_err());
    }

    #[test]
    fn test_full_precision_round_trip() {
        let value = 0.005701399999999968;
        let tree: FrequencyNode = [("alias", FrequencyNode::Value(value))].into_iter().collect();
        let json = serde_json::to_string(&tree).unwrap();
        let back: FrequencyNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value_at(&["alias"]).map(f64::to_bits), Some(value.to_bits()));
    }

    #[test]
    fn test_catalogue_leaves_read_back_bit_identical() {
        let tree = build_catalogue().to_node();
        let json = serde_json::to_string_pretty(&tree).unwrap();
        let back: FrequencyNode = serde_json::from_str(&json).unwrap();

        let written = tree.leaves();
        let read = back.leaves();
        assert_eq!(written.len(), read.len());

        let lossy: Vec<String> = written
            .iter()
            .zip(&read)
            .filter(|((path, a), (other, b))| path != other || a.to_bits() != b.to_bits())
            .map(|((path, a), (_, b))| format!("{path}: {a:?} -> {b:?}"))
            .collect();
        assert!(lossy.is_empty(), "leaves changed on read-back: {lossy:?}");
    }

    #[test]
    fn test_hard_to_parse_values_read_back_bit_identical() {
        // Shortest representations that need correct rounding when parsed
        let values = [184.11544395140126, 23.935500062674958, 572848.3230030163, 2.2250738585072014e-308];
        for value in values {
            let json = serde_json::to_string(&FrequencyNode::Value(value)).unwrap();
            let back: FrequencyNode = serde_json::from_str(&json).unwrap();
            assert_eq!(back.as_value().map(f64::to_bits), Some(value.to_bits()), "{json}");
        }
    }
}
