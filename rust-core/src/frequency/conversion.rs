use crate::config::{HOURS_PER_DAY, ZERO_FREQUENCY_TOLERANCE};

/// Convert a frequency in cycles per day (cpd) to a period in days.
///
/// A zero frequency is a DC signal without a finite period, so `f64::INFINITY` is returned.
pub fn frequency_to_period(frequency_cpd: f64) -> f64 {
    reciprocal_or_infinite(frequency_cpd)
}

/// Convert a period in days to a frequency in cycles per day (cpd).
///
/// Mirrors [`frequency_to_period`]: a zero period maps to `f64::INFINITY`.
pub fn period_to_frequency(period_days: f64) -> f64 {
    reciprocal_or_infinite(period_days)
}

/// Frequency in cpd of a signal whose period is given in hours (`24 / P`).
pub fn period_hours_to_frequency(period_hours: f64) -> f64 {
    if period_hours.abs() <= ZERO_FREQUENCY_TOLERANCE {
        return f64::INFINITY;
    }
    HOURS_PER_DAY / period_hours
}

fn reciprocal_or_infinite(value: f64) -> f64 {
    if value.abs() <= ZERO_FREQUENCY_TOLERANCE {
        f64::INFINITY
    } else {
        1.0 / value
    }
}
