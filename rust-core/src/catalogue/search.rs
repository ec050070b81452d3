use crate::catalogue::frequency_node::FrequencyNode;
use crate::frequency::frequency_to_period;

/// Preset search windows as (min cpd, max cpd, description).
pub const NAMED_RANGES: &[(f64, f64, &str)] = &[
    (0.0, 0.1, "Long-period signals (>10 days)"),
    (0.9, 1.1, "Near-daily signals"),
    (1.8, 2.2, "Semi-daily signals"),
    (0.02, 0.05, "Monthly signals"),
];

/// A leaf found by [`find_frequencies_in_range`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyMatch {
    /// Dotted path, e.g. `glonass.orbital_peaks.8d_peaks.1f_u+6f_d`
    pub path: String,
    pub frequency: f64,
}

impl FrequencyMatch {
    pub fn period_days(&self) -> f64 {
        frequency_to_period(self.frequency)
    }
}

/// All leaves with `min_cpd <= value <= max_cpd`, sorted by ascending value.
///
/// Equal values keep traversal order. An inverted range matches nothing.
pub fn find_frequencies_in_range(
    node: &FrequencyNode,
    min_cpd: f64,
    max_cpd: f64,
) -> Vec<FrequencyMatch> {
    let mut matches = Vec::new();

    node.for_each_leaf(|path, value| {
        if min_cpd <= value && value <= max_cpd {
            matches.push(FrequencyMatch {
                path: path.to_string(),
                frequency: value,
            });
        }
    });

    matches.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
    matches
}
