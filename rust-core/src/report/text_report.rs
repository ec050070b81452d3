//! Plain-text frequency report.

use std::fmt;

use crate::catalogue::{
    CategoryBreakdown, Constellation, ConstellationFrequencies, FrequencyCatalogue,
    FrequencySummary, OrbitalSignal,
};
use crate::config::HOURS_PER_DAY;
use crate::frequency::frequency_to_period;

const RULE_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 40;

/// Displays the full report for a catalogue.
///
/// Frequencies are written in cpd with 7 decimals and periods in days with 3 decimals.
pub struct FrequencyReport<'a> {
    catalogue: &'a FrequencyCatalogue,
}

impl<'a> FrequencyReport<'a> {
    pub fn new(catalogue: &'a FrequencyCatalogue) -> Self {
        Self { catalogue }
    }
}

/// Render the report to a string.
pub fn render_report(catalogue: &FrequencyCatalogue) -> String {
    FrequencyReport::new(catalogue).to_string()
}

/// `name: freq cpd (period days)` with the name column 30 wide.
pub fn frequency_line(name: &str, frequency: f64) -> String {
    format!(
        "{:<30}: {:12.7} cpd ({:8.3} days)",
        name,
        frequency,
        frequency_to_period(frequency)
    )
}

/// Signal line; the beat period is shown in days below 1 cpd, otherwise in hours.
pub fn signal_line(signal: &OrbitalSignal) -> String {
    let (period, unit) = if signal.frequency_cpd < 1.0 {
        (signal.orbital_period_hours / HOURS_PER_DAY, "days")
    } else {
        (signal.orbital_period_hours, "hrs")
    };

    format!(
        "{:<12}: {:12.7} cpd ({:8.3} {}) -> aliased: {:8.3} days",
        signal.harmonic.label(),
        signal.frequency_cpd,
        period,
        unit,
        signal.aliased_period_days
    )
}

/// Width of the `f_d^NAME` column in draconitic harmonic rows.
///
/// The label is padded by 15 spaces for GPS and by 12 for the longer GLONASS and
/// Galileo names, so those rows end one column further right.
pub fn harmonic_label_width(constellation: Constellation) -> usize {
    let padding = match constellation {
        Constellation::Gps => 15,
        Constellation::Glonass | Constellation::Galileo => 12,
    };
    "f_d^".len() + constellation.display_name().chars().count() + padding
}

fn section_header(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))
}

impl FrequencyReport<'_> {
    fn write_preamble(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "COMPREHENSIVE GNSS AND TIDAL FREQUENCY REPORT")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "All frequencies are given in cycles per day (cpd)")?;
        writeln!(f, "Corresponding periods are shown in parentheses")?;
        writeln!(f)?;
        writeln!(f, "References:")?;
        writeln!(
            f,
            "- Zajdel et al. (2022): Orbital artifacts in multi-GNSS precise point positioning"
        )?;
        writeln!(f, "  time series. J. Geophys. Res. Solid Earth, 127(2), 19.")?;
        writeln!(f, "- Rebischung et al. (2024): Analysis of the IGS contribution to ITRF2020.")?;
        writeln!(f, "  Journal of Geodesy, 98(6), 49.")?;
        writeln!(f)
    }

    fn write_constellation(
        &self,
        f: &mut fmt::Formatter<'_>,
        frequencies: &ConstellationFrequencies,
    ) -> fmt::Result {
        let name = frequencies.constellation.display_name();
        section_header(f, &format!("{} FREQUENCIES", name.to_uppercase()))?;

        for (key, frequency) in frequencies.parameters.base_frequencies() {
            writeln!(f, "{}", frequency_line(key, frequency))?;
        }

        writeln!(f)?;
        writeln!(f, "  {} Draconitic Harmonics:", name)?;
        let symbol = format!("f_d^{}", name);
        let width = harmonic_label_width(frequencies.constellation);
        for (harmonic, frequency) in &frequencies.draconitic_harmonics {
            writeln!(
                f,
                "    {:2}{:<width$}: {:12.7} cpd ({:8.3} days)",
                harmonic,
                symbol,
                frequency,
                frequency_to_period(*frequency)
            )?;
        }

        if let Some(peaks) = &frequencies.orbital_peaks {
            writeln!(f)?;
            writeln!(f, "  {} Orbital Peaks (Rebischung et al. 2024 method):", name)?;
            for (band, band_peaks) in peaks {
                writeln!(f, "    {}:", band.key())?;
                let mut sorted = band_peaks.clone();
                sorted.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
                for peak in &sorted {
                    writeln!(
                        f,
                        "      {:<20}: {:12.7} cpd ({:8.3} days)",
                        peak.label(),
                        peak.frequency,
                        peak.period_days()
                    )?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "  {} Orbital Signals (Zajdel et al. 2022 method):", name)?;
        for signal in &frequencies.orbital_signals {
            writeln!(f, "    {}", signal_line(signal))?;
        }
        writeln!(f)
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = FrequencySummary::from_catalogue(self.catalogue);
        write!(f, "{}", SummaryReport::new(&summary))
    }
}

/// Displays the SUMMARY STATISTICS section on its own.
pub struct SummaryReport<'a> {
    summary: &'a FrequencySummary,
}

impl<'a> SummaryReport<'a> {
    pub fn new(summary: &'a FrequencySummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let statistics = &self.summary.statistics;
        let range = &statistics.frequency_range;

        section_header(f, "SUMMARY STATISTICS")?;
        writeln!(f, "Total number of frequencies: {}", statistics.total_frequencies)?;
        writeln!(f, "Frequency range: {:.7} to {:.7} cpd", range.min_cpd, range.max_cpd)?;
        writeln!(
            f,
            "Period range: {:.3} to {:.3} days",
            range.min_period_days, range.max_period_days
        )?;

        writeln!(f)?;
        writeln!(f, "Frequencies by category:")?;
        for count in &self.summary.categories {
            writeln!(f, "  {}: {} frequencies", count.category.to_uppercase(), count.total())?;
            if let CategoryBreakdown::Subcategories(subcategories) = &count.breakdown {
                for (subcategory, n) in subcategories {
                    writeln!(f, "    {}: {}", subcategory, n)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for FrequencyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalogue = self.catalogue;
        self.write_preamble(f)?;

        section_header(f, "EARTH REFERENCE FREQUENCIES")?;
        writeln!(f, "{}", frequency_line("angular_speed", catalogue.earth.angular_speed))?;
        writeln!(f, "{}", frequency_line("orbital_frequency", catalogue.earth.orbital_frequency))?;
        writeln!(f)?;

        for frequencies in catalogue.constellations() {
            self.write_constellation(f, frequencies)?;
        }

        section_header(f, "TIDAL FREQUENCIES")?;
        for tide in &catalogue.tides {
            writeln!(f, "{}", frequency_line(&tide.name, tide.frequency))?;
        }
        writeln!(f)?;

        section_header(f, "ANNUAL HARMONICS")?;
        for (harmonic, frequency) in &catalogue.annual {
            writeln!(
                f,
                "{:2}{:<26}: {:12.7} cpd ({:8.3} days)",
                harmonic,
                "f_annual",
                frequency,
                frequency_to_period(*frequency)
            )?;
        }
        writeln!(f)?;

        section_header(f, "ALIAS FREQUENCIES")?;
        let mut aliases: Vec<(String, f64)> = catalogue
            .aliases
            .iter()
            .map(|alias| (alias.key(), alias.frequency))
            .collect();
        aliases.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, frequency) in &aliases {
            writeln!(f, "{}", frequency_line(key, *frequency))?;
        }
        writeln!(f)?;

        self.write_summary(f)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}
