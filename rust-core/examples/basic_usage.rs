/// Walkthrough of the frequency catalogue API
///
/// Builds the catalogue, evaluates a few orbital beat periods and sampling aliases,
/// compares the constellations, searches frequency ranges and round-trips the
/// catalogue through JSON.
use gnss_frequencies::catalogue::constants::{EARTH_ROTATION_PERIOD_HOURS, GPS};
use gnss_frequencies::catalogue::{
    Constellation, NAMED_RANGES, build_catalogue, find_frequencies_in_range, frequency_summary,
};
use gnss_frequencies::frequency::{frequency_to_period, orbital_period, subdaily_alias};
use gnss_frequencies::report::{SummaryReport, load_json, save_json};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== GNSS Frequency Catalogue Examples ===\n");
    let catalogue = build_catalogue();

    // Example 1: Basic frequency access
    println!("1. GPS base frequencies:");
    let gps = &catalogue.gps.parameters;
    println!("   Orbital frequency: {:.7} cpd", gps.orbital_frequency);
    println!("   Draconitic frequency: {:.7} cpd", gps.draconitic_frequency);
    println!("   Ground repeat frequency: {:.7} cpd", gps.ground_repeat_frequency);
    let orbital_days = frequency_to_period(gps.orbital_frequency);
    println!(
        "   Orbital period: {:.3} days ({:.1} hours)",
        orbital_days,
        orbital_days * 24.0
    );
    println!(
        "   Draconitic period: {:.1} days\n",
        frequency_to_period(gps.draconitic_frequency)
    );

    // Example 2: Orbital beat periods
    println!("2. Orbital periods for the GPS revolution period:");
    let cases = [
        (-2, 1, "twice daily minus sidereal day"),
        (-1, 1, "daily minus sidereal day"),
        (0, 1, "pure sidereal day"),
        (1, 1, "daily plus sidereal day"),
        (-1, 2, "semi-daily minus half sidereal day"),
    ];
    for (n, m, description) in cases {
        let hours = orbital_period(n, m, GPS.revolution_period_hours, EARTH_ROTATION_PERIOD_HOURS);
        println!(
            "   n={:2} m={:2} {:<36} {:12.3} h {:10.3} days {:10.5} cpd",
            n,
            m,
            description,
            hours,
            hours / 24.0,
            24.0 / hours
        );
    }
    println!();

    // Example 3: Aliasing with 24 h sampling
    println!("3. Aliasing for 24-hour sampling:");
    let frequencies = [
        (2.0057014, "GPS orbital frequency"),
        (1.9322734, "M2 tidal frequency"),
        (0.9295357, "O1 tidal frequency"),
        (4.5, "example high frequency"),
        (0.1, "example low frequency"),
    ];
    for (frequency, description) in frequencies {
        let aliased = subdaily_alias(frequency, 24.0);
        println!(
            "   {:12.7} cpd {:<24} -> {:12.7} cpd ({:12.3} days)",
            frequency,
            description,
            aliased,
            frequency_to_period(aliased)
        );
    }
    println!();

    // Example 4: Constellation comparison
    println!("4. Constellation comparison:");
    for constellation in Constellation::ALL {
        let parameters = constellation.parameters();
        println!(
            "   {:<8} orbital {:10.7} cpd, draconitic {:10.7} cpd ({:6.1} days), \
             ground repeat {:10.7} cpd",
            constellation.display_name(),
            parameters.orbital_frequency,
            parameters.draconitic_frequency,
            frequency_to_period(parameters.draconitic_frequency),
            parameters.ground_repeat_frequency
        );
    }
    println!();

    // Example 5: Range search
    println!("5. Frequency range search:");
    let node = catalogue.to_node();
    for &(min, max, description) in NAMED_RANGES {
        let matches = find_frequencies_in_range(&node, min, max);
        println!("   {} ({}-{} cpd): {} frequencies", description, min, max, matches.len());
        for m in matches.iter().take(3) {
            println!("     {:<45}: {:8.5} cpd ({:8.2} days)", m.path, m.frequency, m.period_days());
        }
    }
    println!();

    // Example 6: JSON export and import
    println!("6. JSON round trip:");
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("example_frequencies.json");
    let size = save_json(&catalogue, &path)?;
    let loaded = load_json(&path)?;
    println!("   Wrote {} bytes to {}", size, path.display());
    println!(
        "   GPS orbital frequency after reload: {:?}",
        loaded.value_at(&["gps", "orbital_frequency"])
    );
    println!("   Trees identical: {}\n", loaded == node);

    // Example 7: Summary
    println!("7. Summary:");
    print!("{}", SummaryReport::new(&frequency_summary()));

    Ok(())
}
