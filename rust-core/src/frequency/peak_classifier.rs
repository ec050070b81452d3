use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::config::{MAX_PEAKS_PER_BAND, PEAK_MULTIPLIERS};
use crate::frequency::conversion::frequency_to_period;

/// Period bands used to group orbital peaks, in evaluation priority order.
///
/// The declaration order is also the ordering used for iteration, so a map keyed
/// by band lists the 8-day band first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeakBand {
    /// (6, 12] days
    EightDay,
    /// (3, 6] days
    FourDay,
    /// (2, 3.5] days
    MultiDay,
    /// (1.5, 2.5] days
    TwoDay,
    /// (0.5, 1.5] days
    OneDay,
}

impl PeakBand {
    /// Bands in the order they are tested; the first band containing a period wins.
    pub const PRIORITY: [PeakBand; 5] = [
        PeakBand::EightDay,
        PeakBand::FourDay,
        PeakBand::MultiDay,
        PeakBand::TwoDay,
        PeakBand::OneDay,
    ];

    /// Half-open period range `(lower, upper]` in days.
    pub fn period_bounds(self) -> (f64, f64) {
        match self {
            PeakBand::EightDay => (6.0, 12.0),
            PeakBand::FourDay => (3.0, 6.0),
            PeakBand::MultiDay => (2.0, 3.5),
            PeakBand::TwoDay => (1.5, 2.5),
            PeakBand::OneDay => (0.5, 1.5),
        }
    }

    pub fn contains_period(self, period_days: f64) -> bool {
        let (lower, upper) = self.period_bounds();
        lower < period_days && period_days <= upper
    }

    /// First band in [`PeakBand::PRIORITY`] containing `period_days`.
    ///
    /// Bands overlap on paper ((2, 3.5] and (3, 6] for instance); priority makes the
    /// assignment unique. Periods outside every band, including infinite ones, yield `None`.
    pub fn classify(period_days: f64) -> Option<PeakBand> {
        Self::PRIORITY
            .into_iter()
            .find(|band| band.contains_period(period_days))
    }

    /// Catalogue key, e.g. `8d_peaks`.
    pub fn key(self) -> &'static str {
        match self {
            PeakBand::EightDay => "8d_peaks",
            PeakBand::FourDay => "4d_peaks",
            PeakBand::MultiDay => "2-7d_peaks",
            PeakBand::TwoDay => "2d_peaks",
            PeakBand::OneDay => "1d_peaks",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PeakBand::EightDay => "8-day",
            PeakBand::FourDay => "4-day",
            PeakBand::MultiDay => "multi-day (2-7d)",
            PeakBand::TwoDay => "2-day",
            PeakBand::OneDay => "1-day",
        }
    }
}

/// One combination `multiplier * f_u + harmonic * f_d` after folding against 1 cpd.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalPeak {
    pub multiplier: u32,
    pub harmonic: i32,
    /// Aliased frequency in cpd
    pub frequency: f64,
}

impl OrbitalPeak {
    /// Label such as `2f_u-3f_d` or `1f_u+0f_d`.
    pub fn label(&self) -> String {
        format!("{}f_u{:+}f_d", self.multiplier, self.harmonic)
    }

    pub fn period_days(&self) -> f64 {
        frequency_to_period(self.frequency)
    }
}

/// Peaks per band. Only non-empty bands are present.
pub type OrbitalPeaks = BTreeMap<PeakBand, Vec<OrbitalPeak>>;

/// Enumerate `mult * base_frequency + k * secondary_frequency` for `mult` in
/// [`PEAK_MULTIPLIERS`] and `k` in `harmonic_range`, fold each against 1 cpd and bucket
/// the result by its period.
///
/// Each band keeps its [`MAX_PEAKS_PER_BAND`] highest frequencies, sorted descending.
/// Equal frequencies keep generation order (multiplier, then harmonic, ascending).
///
/// # Arguments
/// * `base_frequency` - Sun argument of latitude frequency `f_u` in cpd
/// * `secondary_frequency` - Draconitic frequency `f_d` in cpd
/// * `harmonic_range` - Draconitic harmonic orders `k`, both ends inclusive
pub fn classify_peaks(
    base_frequency: f64,
    secondary_frequency: f64,
    harmonic_range: RangeInclusive<i32>,
) -> OrbitalPeaks {
    let mut bands = OrbitalPeaks::new();

    for multiplier in PEAK_MULTIPLIERS {
        let base = f64::from(multiplier) * base_frequency;

        for harmonic in harmonic_range.clone() {
            let combined = base + f64::from(harmonic) * secondary_frequency;
            let frequency = (combined - combined.round_ties_even()).abs();

            if let Some(band) = PeakBand::classify(frequency_to_period(frequency)) {
                bands.entry(band).or_default().push(OrbitalPeak {
                    multiplier,
                    harmonic,
                    frequency,
                });
            }
        }
    }

    for peaks in bands.values_mut() {
        peaks.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
        peaks.truncate(MAX_PEAKS_PER_BAND);
    }

    bands
}
