// Constants

use std::ops::RangeInclusive;

// Tolerances
pub const RESONANCE_TOLERANCE: f64 = 1e-10; // Beat denominators below this are treated as resonant
pub const ZERO_FREQUENCY_TOLERANCE: f64 = 0.0; // Magnitudes at or below this have no reciprocal

// Units
pub const HOURS_PER_DAY: f64 = 24.0;

// Sampling
pub const DEFAULT_SAMPLING_INTERVAL_HOURS: f64 = 24.0; // Daily solutions
pub const DAILY_REFERENCE_FREQUENCY: f64 = 1.0; // cpd

// Harmonic series lengths
pub const DRACONITIC_HARMONIC_COUNT: u32 = 15;
pub const ANNUAL_HARMONIC_COUNT: u32 = 12;

// Peak classification
pub const PEAK_MULTIPLIERS: RangeInclusive<u32> = 1..=4; // 1f_u .. 4f_u
pub const DEFAULT_PEAK_HARMONIC_RANGE: RangeInclusive<i32> = -6..=6; // draconitic harmonics k
pub const MAX_PEAKS_PER_BAND: usize = 10;

// Output
pub const DEFAULT_EXPORT_FILE: &str = "gnss_frequencies.json";
