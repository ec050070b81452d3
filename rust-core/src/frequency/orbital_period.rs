use std::fmt;

use crate::config::RESONANCE_TOLERANCE;

/// Integer coefficient pair `(n, m)` of an orbital beat signal.
///
/// `n` is the order of the Earth-rotation harmonic and `m` the order of the
/// satellite-revolution harmonic. `(0, 0)` selects no signal at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrbitalHarmonic {
    pub n: i32,
    pub m: i32,
}

impl OrbitalHarmonic {
    pub const fn new(n: i32, m: i32) -> Self {
        Self { n, m }
    }

    /// True for `(0, 0)`, which has no period.
    pub fn is_degenerate(&self) -> bool {
        self.n == 0 && self.m == 0
    }

    /// Beat period in hours, see [`orbital_period`].
    pub fn period(&self, satellite_period: f64, earth_period: f64) -> f64 {
        orbital_period(self.n, self.m, satellite_period, earth_period)
    }

    /// Key used in the catalogue, e.g. `n-2_m1`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrbitalHarmonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}_m{}", self.n, self.m)
    }
}

/// Beat period between an Earth-fixed harmonic and a satellite-orbit harmonic.
///
/// `P = |1 / (n / T_E + m / T_S)|`, in the time unit of the inputs (hours in practice).
///
/// Returns `f64::INFINITY` for `(0, 0)` and when the denominator is within
/// [`RESONANCE_TOLERANCE`] of zero (resonant combination).
///
/// # Arguments
/// * `n` - Earth-rotation harmonic order
/// * `m` - Satellite-revolution harmonic order
/// * `satellite_period` - Satellite revolution period `T_S`
/// * `earth_period` - Earth rotation (sidereal) period `T_E`
pub fn orbital_period(n: i32, m: i32, satellite_period: f64, earth_period: f64) -> f64 {
    if n == 0 && m == 0 {
        return f64::INFINITY;
    }

    let denominator = f64::from(n) / earth_period + f64::from(m) / satellite_period;
    if denominator.abs() < RESONANCE_TOLERANCE {
        return f64::INFINITY;
    }

    (1.0 / denominator).abs()
}
