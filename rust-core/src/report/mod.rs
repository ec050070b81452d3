// Report module: human-readable report and JSON persistence of the catalogue

// ======================== MODULE DECLARATIONS ========================
pub mod json_export;
pub mod text_report;

mod _tests_text_report;

// ======================== TEXT REPORT ========================
pub use text_report::{
    FrequencyReport,      // struct - Display wrapper over a &FrequencyCatalogue
    SummaryReport,        // struct - Display wrapper over a &FrequencySummary
    frequency_line,       // fn(name: &str, frequency: f64) -> String - 30-wide name, cpd and days
    harmonic_label_width, // fn(constellation: Constellation) -> usize - f_d^NAME column width
    render_report,        // fn(catalogue: &FrequencyCatalogue) -> String - full report
    signal_line,          // fn(signal: &OrbitalSignal) -> String - days below 1 cpd, else hours
};

// ======================== JSON ========================
pub use json_export::{
    load_json,  // fn(path) -> Result<FrequencyNode> - top level must be an object
    read_json,  // fn(reader: impl Read) -> Result<FrequencyNode>
    save_json,  // fn(catalogue: &FrequencyCatalogue, path) -> Result<u64> - bytes
    save_node,  // fn(node: &FrequencyNode, path) -> Result<u64>
    write_json, // fn(node: &FrequencyNode, writer: impl Write) -> Result<()> - pretty
};
