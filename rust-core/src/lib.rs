//! GNSS frequency catalogue library
//!
//! This library computes the characteristic frequencies that show up as spurious
//! periodic signals in GNSS position time series: draconitic harmonics, orbital
//! beat signals and their daily-sampling aliases, GLONASS/Galileo orbital peaks,
//! tidal aliases and annual harmonics. All frequencies are in cycles per day (cpd).

pub mod catalogue;
pub mod config;
pub mod error;
pub mod frequency;
pub mod report;

pub use error::FrequencyError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, FrequencyError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
