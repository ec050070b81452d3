use std::collections::BTreeMap;

/// Harmonic index (1-based) to frequency in cpd.
pub type HarmonicSeries = BTreeMap<u32, f64>;

/// Integer-multiple series `i * base_frequency` for `i` in `1..=max_harmonic`.
pub fn harmonics(base_frequency: f64, max_harmonic: u32) -> HarmonicSeries {
    (1..=max_harmonic)
        .map(|index| (index, f64::from(index) * base_frequency))
        .collect()
}
