// Catalogue module: assembles the GNSS/tidal frequency catalogue from embedded constants
// Also provides the tagged tree view used for traversal, statistics, search and JSON

// ======================== MODULE DECLARATIONS ========================
pub mod catalogue_builder;
pub mod constants;
pub mod constellation;
pub mod frequency_node;
pub mod search;
pub mod summary;

mod _tests_frequency_node;
mod _tests_search;
mod _tests_summary;

// ======================== CONSTELLATIONS ========================
pub use constellation::{
    Constellation,           // enum - Gps, Glonass, Galileo
    ConstellationParameters, // struct - orbital, nodal, ground repeat, draconitic (+ sun arg. of latitude) frequencies
};
// Constellation impl methods:
//   key(self) -> &'static str                                - "gps", "glonass", "galileo"
//   display_name(self) -> &'static str                       - "GPS", "GLONASS", "Galileo"
//   parameters(self) -> &'static ConstellationParameters     - embedded constants
//   from_name(name: &str) -> Option<Constellation>           - case-insensitive lookup

// ======================== CATALOGUE ASSEMBLY ========================
pub use catalogue_builder::{
    AliasReference,           // enum - Daily or GroundRepeat(Constellation)
    ConstellationFrequencies, // struct - parameters, draconitic harmonics, peaks, orbital signals
    EarthFrequencies,         // struct - angular speed and orbital frequency
    FrequencyCatalogue,       // struct - the complete read-only catalogue
    OrbitalSignal,            // struct - (n, m) beat period, frequency and daily-sampling alias
    TidalAlias,               // struct - tide folded against one reference
    TidalFrequency,           // struct - named tidal constituent
    build_catalogue,          // fn() -> FrequencyCatalogue - pure, deterministic
    orbital_signals,          // fn(parameters: &ConstellationParameters, sampling_interval_hours: f64) -> Vec<OrbitalSignal>
    tidal_aliases,            // fn(tides: &[TidalFrequency]) -> Vec<TidalAlias> - 4 aliases per tide
};
// FrequencyCatalogue impl methods:
//   constellation(&self, c: Constellation) -> &ConstellationFrequencies
//   constellations(&self) -> [&ConstellationFrequencies; 3]  - catalogue order
//   alias(&self, key: &str) -> Option<f64>                   - e.g. "M_2_gps"
//   to_node(&self) -> FrequencyNode                          - nested mapping mirrored by the JSON export

// ======================== TAGGED TREE ========================
pub use frequency_node::FrequencyNode; // enum - Value(f64) | Table(Vec<(String, FrequencyNode)>)
// FrequencyNode impl methods:
//   get(&self, key: &str) -> Option<&FrequencyNode>          - direct child lookup
//   get_path(&self, path: &[&str]) -> Option<&FrequencyNode> - nested lookup
//   value_at(&self, path: &[&str]) -> Option<f64>            - nested leaf lookup
//   for_each_leaf(&self, visit: FnMut(&str, f64))            - depth-first with dotted paths
//   leaves(&self) -> Vec<(String, f64)>                      - collected leaves

// ======================== STATISTICS & SEARCH ========================
pub use summary::{
    CategoryBreakdown,   // enum - Total(usize) | Subcategories(Vec<(&str, usize)>)
    CategoryCount,       // struct - category name and its breakdown
    FrequencyRange,      // struct - min/max frequency and implied periods
    FrequencyStatistics, // struct - count and range of positive leaves
    FrequencySummary,    // struct - statistics plus category counts
    category_counts,     // fn(catalogue: &FrequencyCatalogue) -> Vec<CategoryCount>
    frequency_summary,   // fn() -> FrequencySummary - summary of a freshly built catalogue
};

pub use search::{
    FrequencyMatch,            // struct - dotted path and value of a matching leaf
    NAMED_RANGES,              // const - preset (min, max, description) windows
    find_frequencies_in_range, // fn(node: &FrequencyNode, min_cpd: f64, max_cpd: f64) -> Vec<FrequencyMatch>
};
