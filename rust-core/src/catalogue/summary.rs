use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalogue::catalogue_builder::{FrequencyCatalogue, build_catalogue};
use crate::catalogue::constellation::Constellation;
use crate::catalogue::frequency_node::FrequencyNode;
use crate::frequency::frequency_to_period;

/// Extent of the positive frequencies in a tree and the matching periods.
///
/// All fields are zero when the tree holds no positive frequency.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct FrequencyRange {
    pub min_cpd: f64,
    pub max_cpd: f64,
    pub min_period_days: f64,
    pub max_period_days: f64,
}

/// Count and range of every strictly positive, finite leaf of a tree.
///
/// Leaves are taken as frequency samples whatever their unit, so period leaves such as
/// `orbital_period_hours` are counted too. Negative values (nodal precession) are not.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct FrequencyStatistics {
    pub total_frequencies: usize,
    pub frequency_range: FrequencyRange,
}

impl FrequencyStatistics {
    pub fn from_node(node: &FrequencyNode) -> Self {
        let mut total_frequencies = 0;
        let mut min_cpd = f64::INFINITY;
        let mut max_cpd = f64::NEG_INFINITY;

        node.for_each_leaf(|_, value| {
            if value > 0.0 && value.is_finite() {
                total_frequencies += 1;
                min_cpd = min_cpd.min(value);
                max_cpd = max_cpd.max(value);
            }
        });

        if total_frequencies == 0 {
            return Self::default();
        }

        Self {
            total_frequencies,
            frequency_range: FrequencyRange {
                min_cpd,
                max_cpd,
                min_period_days: frequency_to_period(max_cpd),
                max_period_days: frequency_to_period(min_cpd),
            },
        }
    }
}

/// Count of one catalogue category, either a single total or a per-subcategory breakdown.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryBreakdown {
    Total(usize),
    Subcategories(Vec<(&'static str, usize)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: &'static str,
    pub breakdown: CategoryBreakdown,
}

impl CategoryCount {
    pub fn total(&self) -> usize {
        match &self.breakdown {
            CategoryBreakdown::Total(count) => *count,
            CategoryBreakdown::Subcategories(counts) => counts.iter().map(|(_, count)| count).sum(),
        }
    }
}

/// Statistics plus per-category counts of a catalogue.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrequencySummary {
    #[serde(flatten)]
    pub statistics: FrequencyStatistics,
    #[serde(serialize_with = "serialize_categories")]
    pub categories: Vec<CategoryCount>,
}

impl FrequencySummary {
    pub fn from_catalogue(catalogue: &FrequencyCatalogue) -> Self {
        Self {
            statistics: FrequencyStatistics::from_node(&catalogue.to_node()),
            categories: category_counts(catalogue),
        }
    }

    /// Count for a top-level category name such as `aliases`.
    pub fn category(&self, name: &str) -> Option<&CategoryCount> {
        self.categories.iter().find(|count| count.category == name)
    }
}

/// Summary of a freshly built catalogue.
pub fn frequency_summary() -> FrequencySummary {
    FrequencySummary::from_catalogue(&build_catalogue())
}

/// Entry counts per category, constellations broken down by sub-table.
pub fn category_counts(catalogue: &FrequencyCatalogue) -> Vec<CategoryCount> {
    let mut categories: Vec<CategoryCount> = Constellation::ALL
        .into_iter()
        .map(|constellation| {
            let frequencies = catalogue.constellation(constellation);
            let mut counts = vec![("draconitic_harmonics", frequencies.draconitic_harmonics.len())];
            if frequencies.orbital_peaks.is_some() {
                counts.push(("orbital_peaks", frequencies.peak_count()));
            }
            counts.push(("orbital_signals", frequencies.orbital_signals.len()));

            CategoryCount {
                category: constellation.key(),
                breakdown: CategoryBreakdown::Subcategories(counts),
            }
        })
        .collect();

    categories.extend([
        CategoryCount {
            category: "tides",
            breakdown: CategoryBreakdown::Total(catalogue.tides.len()),
        },
        CategoryCount {
            category: "annual",
            breakdown: CategoryBreakdown::Total(catalogue.annual.len()),
        },
        CategoryCount {
            category: "aliases",
            breakdown: CategoryBreakdown::Total(catalogue.aliases.len()),
        },
    ]);

    categories
}

// Categories serialise as an object: totals as numbers, breakdowns as nested objects.
fn serialize_categories<S: Serializer>(
    categories: &[CategoryCount],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(categories.len()))?;
    for count in categories {
        map.serialize_entry(count.category, &count.breakdown)?;
    }
    map.end()
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CategoryBreakdown::Total(count) => serializer.serialize_u64(*count as u64),
            CategoryBreakdown::Subcategories(counts) => {
                let mut map = serializer.serialize_map(Some(counts.len()))?;
                for (name, count) in counts {
                    map.serialize_entry(name, count)?;
                }
                map.end()
            }
        }
    }
}
