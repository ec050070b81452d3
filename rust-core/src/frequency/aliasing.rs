use crate::config::{DEFAULT_SAMPLING_INTERVAL_HOURS, HOURS_PER_DAY};

/// Fold `frequency` against the nearest integer multiple of `reference`.
///
/// Computes `|f - round(f / r) * r|`. Rounding is half-to-even, so a ratio of exactly
/// `2.5` selects the multiple `2`. A zero reference folds against multiples of 1.0 instead.
///
/// # Arguments
/// * `frequency` - Input frequency in cpd
/// * `reference` - Reference frequency in cpd (e.g. a ground-repeat frequency)
pub fn alias_against_reference(frequency: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        return (frequency - nearest_multiple(frequency)).abs();
    }

    let ratio = frequency / reference;
    (frequency - nearest_multiple(ratio) * reference).abs()
}

/// Nearest integer to `ratio`, ties going to the even neighbour.
pub fn nearest_multiple(ratio: f64) -> f64 {
    ratio.round_ties_even()
}

/// Aliased frequency of a signal observed with a fixed sampling interval.
///
/// With `T` the sampling interval in days this is `|f - (1/T) * floor(f*T + 0.5)|`, i.e. the
/// signal folded into the band representable at `1/T` samples per day. The `floor(x + 0.5)`
/// form rounds ties upwards.
///
/// A non-positive or non-finite interval has no sampling rate to fold against; `|f|` is returned.
///
/// # Arguments
/// * `frequency_cpd` - Original signal frequency in cycles per day
/// * `sampling_interval_hours` - Sampling interval in hours (24 for daily solutions)
pub fn subdaily_alias(frequency_cpd: f64, sampling_interval_hours: f64) -> f64 {
    let interval_days = sampling_interval_hours / HOURS_PER_DAY;
    if !(interval_days.is_finite() && interval_days > 0.0) {
        return frequency_cpd.abs();
    }

    let sampling_rate = 1.0 / interval_days;
    (frequency_cpd - sampling_rate * (frequency_cpd * interval_days + 0.5).floor()).abs()
}

/// [`subdaily_alias`] for daily sampling.
pub fn daily_alias(frequency_cpd: f64) -> f64 {
    subdaily_alias(frequency_cpd, DEFAULT_SAMPLING_INTERVAL_HOURS)
}
