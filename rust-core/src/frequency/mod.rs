// Frequency module: closed-form primitives of the frequency catalogue
// Unit conversion, alias folding, orbital beat periods, harmonic series and peak banding

// ======================== MODULE DECLARATIONS ========================
pub mod aliasing;
pub mod conversion;
pub mod harmonics;
pub mod orbital_period;
pub mod peak_classifier;

mod _tests_conversion;
mod _tests_harmonics;

// ======================== UNIT CONVERSION ========================
pub use conversion::{
    frequency_to_period,       // fn(frequency_cpd: f64) -> f64 - period in days, +inf for 0
    period_hours_to_frequency, // fn(period_hours: f64) -> f64 - 24 / P, +inf for 0
    period_to_frequency,       // fn(period_days: f64) -> f64 - frequency in cpd, +inf for 0
};

// ======================== ALIAS ARITHMETIC ========================
pub use aliasing::{
    alias_against_reference, // fn(frequency: f64, reference: f64) -> f64 - |f - round(f/r)*r|, half-to-even
    daily_alias,             // fn(frequency_cpd: f64) -> f64 - subdaily_alias with 24 h sampling
    nearest_multiple,        // fn(ratio: f64) -> f64 - nearest integer, ties to even
    subdaily_alias,          // fn(frequency_cpd: f64, sampling_interval_hours: f64) -> f64 - floor-based folding
};

// ======================== ORBITAL BEAT PERIODS ========================
pub use orbital_period::{
    OrbitalHarmonic, // struct - (n, m) coefficient pair
    orbital_period,  // fn(n: i32, m: i32, satellite_period: f64, earth_period: f64) -> f64 - +inf when undefined
};
// OrbitalHarmonic impl methods:
//   new(n: i32, m: i32) -> Self                              - const constructor
//   is_degenerate(&self) -> bool                             - true for (0, 0)
//   period(&self, satellite_period: f64, earth_period: f64) -> f64 - beat period via orbital_period
//   label(&self) -> String                                   - catalogue key "n{n}_m{m}"

// ======================== HARMONIC SERIES ========================
pub use harmonics::{
    HarmonicSeries, // type - BTreeMap<u32, f64>, harmonic index -> frequency
    harmonics,      // fn(base_frequency: f64, max_harmonic: u32) -> HarmonicSeries
};

// ======================== PEAK CLASSIFICATION ========================
pub use peak_classifier::{
    OrbitalPeak,    // struct - multiplier, harmonic and aliased frequency of one combination
    OrbitalPeaks,   // type - BTreeMap<PeakBand, Vec<OrbitalPeak>>, non-empty bands only
    PeakBand,       // enum - EightDay, FourDay, MultiDay, TwoDay, OneDay (priority order)
    classify_peaks, // fn(base: f64, secondary: f64, harmonic_range: RangeInclusive<i32>) -> OrbitalPeaks
};
// PeakBand impl methods:
//   classify(period_days: f64) -> Option<PeakBand>           - first band in priority order containing the period
//   period_bounds(self) -> (f64, f64)                        - (lower, upper] in days
//   key(self) -> &'static str                                - catalogue key, e.g. "2-7d_peaks"
//   description(self) -> &'static str                        - human readable band name
