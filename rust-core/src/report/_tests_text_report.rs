#[cfg(test)]
mod _tests_text_report {
    use super::super::text_report::*;
    use crate::catalogue::{Constellation, build_catalogue};
    use crate::frequency::OrbitalHarmonic;

    fn report_lines() -> Vec<String> {
        render_report(&build_catalogue())
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn has_line(lines: &[String], expected: &str) -> bool {
        lines.iter().any(|line| line == expected)
    }

    #[test]
    fn test_frequency_line_format() {
        assert_eq!(
            frequency_line("angular_speed", 1.0027378),
            "angular_speed                 :    1.0027378 cpd (   0.997 days)"
        );
        assert_eq!(
            frequency_line("nodal_precession_frequency", -0.0001075),
            "nodal_precession_frequency    :   -0.0001075 cpd (-9302.326 days)"
        );
    }

    #[test]
    fn test_signal_line_switches_units_at_one_cpd() {
        let catalogue = build_catalogue();

        let slow = catalogue.gps.signal(OrbitalHarmonic::new(-2, 1)).unwrap();
        assert_eq!(
            signal_line(slow),
            "n-2_m1      :    0.0000419 cpd (23868.680 days) -> aliased: 23868.680 days"
        );

        let fast = catalogue.gps.signal(OrbitalHarmonic::new(1, 1)).unwrap();
        assert_eq!(
            signal_line(fast),
            "n1_m1       :    3.0082518 cpd (   7.978 hrs) -> aliased:  121.186 days"
        );
    }

    #[test]
    fn test_sections_in_order() {
        let lines = report_lines();
        let position = |title: &str| {
            lines
                .iter()
                .position(|line| line == title)
                .unwrap_or_else(|| panic!("missing section {title}"))
        };

        let sections = [
            "COMPREHENSIVE GNSS AND TIDAL FREQUENCY REPORT",
            "EARTH REFERENCE FREQUENCIES",
            "GPS FREQUENCIES",
            "GLONASS FREQUENCIES",
            "GALILEO FREQUENCIES",
            "TIDAL FREQUENCIES",
            "ANNUAL HARMONICS",
            "ALIAS FREQUENCIES",
            "SUMMARY STATISTICS",
        ];
        let positions: Vec<usize> = sections.iter().map(|title| position(*title)).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(lines.last().unwrap(), &"=".repeat(80));
    }

    #[test]
    fn test_body_lines() {
        let lines = report_lines();

        assert!(has_line(&lines, "orbital_frequency             :    2.0057014 cpd (   0.499 days)"));
        assert!(has_line(&lines, "     1f_d^GPS               :    0.0028453 cpd ( 351.457 days)"));
        assert!(has_line(&lines, "    15f_d^GPS               :    0.0426795 cpd (  23.430 days)"));
        assert!(has_line(&lines, " 1f_annual                  :    0.0027378 cpd ( 365.257 days)"));
        assert!(has_line(&lines, "145_545                       :    0.9293886 cpd (   1.076 days)"));
        assert!(has_line(&lines, "  Galileo Orbital Peaks (Rebischung et al. 2024 method):"));
        // GPS has no sun argument of latitude, so no peak section
        assert!(!has_line(&lines, "  GPS Orbital Peaks (Rebischung et al. 2024 method):"));
    }

    #[test]
    fn test_harmonic_rows_per_constellation() {
        assert_eq!(harmonic_label_width(Constellation::Gps), 22);
        assert_eq!(harmonic_label_width(Constellation::Glonass), 23);
        assert_eq!(harmonic_label_width(Constellation::Galileo), 23);

        let lines = report_lines();
        assert!(has_line(&lines, "     1f_d^GLONASS            :    0.0028300 cpd ( 353.357 days)"));
        assert!(has_line(&lines, "    15f_d^Galileo            :    0.0421560 cpd (  23.721 days)"));
    }

    #[test]
    fn test_peaks_ascending_within_band() {
        let lines = report_lines();
        let start = lines.iter().position(|line| line == "    8d_peaks:").unwrap();

        assert_eq!(lines[start + 1], "      1f_u-3f_d           :    0.1196982 cpd (   8.354 days)");
        assert_eq!(lines[start + 10], "      1f_u+6f_d           :    0.1451682 cpd (   6.889 days)");
        assert_eq!(lines[start + 11], "    4d_peaks:");
    }

    #[test]
    fn test_aliases_sorted_by_name() {
        let lines = report_lines();
        let start = lines.iter().position(|line| line == "ALIAS FREQUENCIES").unwrap();

        assert_eq!(lines[start + 2], "145_545_daily                 :    0.0706114 cpd (  14.162 days)");
        assert_eq!(lines[start + 3], "145_545_galileo               :    0.0152532 cpd (  65.560 days)");
        assert_eq!(lines[start + 2 + 31], "μ_2_gps                       :    0.1411541 cpd (   7.084 days)");
        assert!(has_line(&lines, "M_2_gps                       :    0.0734280 cpd (  13.619 days)"));
    }

    #[test]
    fn test_summary_section() {
        let lines = report_lines();

        assert!(has_line(&lines, "Total number of frequencies: 422"));
        assert!(has_line(&lines, "Frequency range: 0.0000419 to 572848.3230030 cpd"));
        assert!(has_line(&lines, "Period range: 0.000 to 23868.680 days"));
        assert!(has_line(&lines, "  GLONASS: 66 frequencies"));
        assert!(has_line(&lines, "    orbital_peaks: 30"));
        assert!(has_line(&lines, "  ALIASES: 32 frequencies"));
    }
}
