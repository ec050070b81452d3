use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};

use gnss_frequencies::catalogue::constants::{EARTH_ROTATION_PERIOD_HOURS, GPS};
use gnss_frequencies::catalogue::{
    Constellation, FrequencyCatalogue, FrequencyMatch, FrequencyNode, FrequencySummary,
    NAMED_RANGES, build_catalogue, find_frequencies_in_range,
};
use gnss_frequencies::config::{DEFAULT_EXPORT_FILE, DEFAULT_SAMPLING_INTERVAL_HOURS};
use gnss_frequencies::frequency::{orbital_period, period_hours_to_frequency, subdaily_alias};
use gnss_frequencies::report::{SummaryReport, frequency_line, load_json, render_report, save_json};

#[derive(Parser)]
#[command(name = "gnss-frequencies")]
#[command(about = "Catalogue of GNSS orbital, draconitic, tidal and annual frequencies")]
#[command(version)]
struct Cli {
    /// Runs the full report and export when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full frequency report
    Report,
    /// Write the catalogue to a JSON file
    Export {
        /// Output file path
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
    /// Print total count, frequency range and per-category counts
    Summary {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalogue frequencies inside a range (preset ranges when no bounds are given)
    Search {
        /// Lower bound [cpd], inclusive
        #[arg(long)]
        min: Option<f64>,

        /// Upper bound [cpd], inclusive
        #[arg(long)]
        max: Option<f64>,

        /// Search a previously exported JSON file instead of a fresh catalogue
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Alias a frequency into the band resolvable with a given sampling interval
    Alias {
        /// Frequency [cpd]
        #[arg(allow_negative_numbers = true)]
        frequency: f64,

        /// Sampling interval [h]
        #[arg(long, default_value_t = DEFAULT_SAMPLING_INTERVAL_HOURS)]
        interval_hours: f64,
    },
    /// Beat period of orbital harmonic (n, m)
    OrbitalPeriod {
        #[arg(long, allow_negative_numbers = true)]
        n: i32,

        #[arg(long, allow_negative_numbers = true)]
        m: i32,

        /// Satellite revolution period [h], GPS by default
        #[arg(long, default_value_t = GPS.revolution_period_hours)]
        satellite_period: f64,

        /// Earth rotation period [h]
        #[arg(long, default_value_t = EARTH_ROTATION_PERIOD_HOURS)]
        earth_period: f64,
    },
    /// Print the orbital peaks of a constellation by band
    Peaks {
        /// gps, glonass or galileo
        constellation: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting gnss-frequencies v{}", gnss_frequencies::VERSION);

    match cli.command {
        None => run_full_analysis(),
        Some(Commands::Report) => {
            print!("{}", render_report(&build_catalogue()));
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let size = save_json(&build_catalogue(), &output)
                .with_context(|| format!("Failed to export catalogue to {}", output.display()))?;
            print_saved(&output, size);
            Ok(())
        }
        Some(Commands::Summary { json }) => print_summary(json),
        Some(Commands::Search { min, max, input }) => search(min, max, input.as_deref()),
        Some(Commands::Alias {
            frequency,
            interval_hours,
        }) => {
            let aliased = subdaily_alias(frequency, interval_hours);
            println!("Sampling interval: {} h", interval_hours);
            println!("{}", frequency_line("input", frequency));
            println!("{}", frequency_line("aliased", aliased));
            Ok(())
        }
        Some(Commands::OrbitalPeriod {
            n,
            m,
            satellite_period,
            earth_period,
        }) => {
            let period = orbital_period(n, m, satellite_period, earth_period);
            if period.is_infinite() {
                warn!("Orbital harmonic n={} m={} has no finite beat period", n, m);
            }
            println!("T(n={}, m={}) = {:.6} h", n, m, period);
            println!("{}", frequency_line("frequency", period_hours_to_frequency(period)));
            Ok(())
        }
        Some(Commands::Peaks { constellation }) => print_peaks(&constellation),
    }
}

fn run_full_analysis() -> anyhow::Result<()> {
    println!("GNSS Frequencies Calculator v{}", gnss_frequencies::VERSION);
    println!("Comprehensive frequency analysis for GPS, GLONASS, and Galileo");
    println!();

    let catalogue = build_catalogue();
    println!("Generating frequency report...");
    print!("{}", render_report(&catalogue));

    println!();
    println!("Saving frequencies to JSON file...");
    let exported = match save_json(&catalogue, DEFAULT_EXPORT_FILE) {
        Ok(size) => {
            print_saved(Path::new(DEFAULT_EXPORT_FILE), size);
            true
        }
        Err(e) => {
            warn!("Error saving JSON file: {}", e);
            false
        }
    };

    print_completion(&catalogue, exported);
    Ok(())
}

fn print_saved(path: &Path, size: u64) {
    println!();
    println!("GNSS frequencies saved to '{}'", path.display());
    println!("File size: {} bytes ({:.1} KB)", size, size as f64 / 1024.0);
}

fn print_completion(catalogue: &FrequencyCatalogue, exported: bool) {
    let summary = FrequencySummary::from_catalogue(catalogue);
    let count = |name: &str| summary.category(name).map_or(0, |c| c.total());

    println!();
    println!("{}", "=".repeat(80));
    println!("ANALYSIS COMPLETE");
    println!("{}", "=".repeat(80));
    println!(
        "Generated {} frequencies across all categories",
        summary.statistics.total_frequencies
    );
    println!("Calculated orbital signals for {} GNSS constellations", Constellation::ALL.len());
    println!("Included {} annual harmonics", count("annual"));
    println!("Computed {} alias frequencies", count("aliases"));
    if exported {
        println!("Saved complete database to {}", DEFAULT_EXPORT_FILE);
    } else {
        println!("JSON export failed; see the log for details");
    }
}

fn print_summary(json: bool) -> anyhow::Result<()> {
    let summary = FrequencySummary::from_catalogue(&build_catalogue());
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", SummaryReport::new(&summary));
    }
    Ok(())
}

fn search(min: Option<f64>, max: Option<f64>, input: Option<&Path>) -> anyhow::Result<()> {
    let node: FrequencyNode = match input {
        Some(path) => {
            load_json(path).with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => build_catalogue().to_node(),
    };

    match (min, max) {
        (Some(min), Some(max)) => {
            let matches = find_frequencies_in_range(&node, min, max);
            print_matches(&format!("{} to {} cpd", min, max), &matches);
        }
        (None, None) => {
            for &(min, max, description) in NAMED_RANGES {
                let matches = find_frequencies_in_range(&node, min, max);
                print_matches(&format!("{} ({}-{} cpd)", description, min, max), &matches);
                println!();
            }
        }
        _ => bail!("--min and --max must be given together"),
    }
    Ok(())
}

fn print_matches(title: &str, matches: &[FrequencyMatch]) {
    println!("{}: {} frequencies", title, matches.len());
    for m in matches {
        println!(
            "  {:<50} {:12.7} cpd ({:10.3} days)",
            m.path,
            m.frequency,
            m.period_days()
        );
    }
}

fn print_peaks(name: &str) -> anyhow::Result<()> {
    let Some(constellation) = Constellation::from_name(name) else {
        bail!("Unknown constellation '{}' (expected gps, glonass or galileo)", name);
    };

    let catalogue = build_catalogue();
    let frequencies = catalogue.constellation(constellation);
    let Some(peaks) = &frequencies.orbital_peaks else {
        println!("{} has no sun argument of latitude frequency; no orbital peaks", constellation);
        return Ok(());
    };

    for (band, band_peaks) in peaks {
        println!("{} ({}):", band.description(), band.key());
        for peak in band_peaks {
            println!(
                "  {:<12} {:12.7} cpd ({:8.3} days)",
                peak.label(),
                peak.frequency,
                peak.period_days()
            );
        }
    }
    Ok(())
}
