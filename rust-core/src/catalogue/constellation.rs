use std::fmt;

use crate::catalogue::constants::{GALILEO, GLONASS, GPS};

/// The three GNSS constellations covered by the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Constellation {
    Gps,
    Glonass,
    Galileo,
}

impl Constellation {
    /// Catalogue order.
    pub const ALL: [Constellation; 3] =
        [Constellation::Gps, Constellation::Glonass, Constellation::Galileo];

    /// Order in which ground-repeat aliases are listed per tide.
    pub const ALIAS_ORDER: [Constellation; 3] =
        [Constellation::Gps, Constellation::Galileo, Constellation::Glonass];

    /// Lower-case catalogue key.
    pub fn key(self) -> &'static str {
        match self {
            Constellation::Gps => "gps",
            Constellation::Glonass => "glonass",
            Constellation::Galileo => "galileo",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Constellation::Gps => "GPS",
            Constellation::Glonass => "GLONASS",
            Constellation::Galileo => "Galileo",
        }
    }

    pub fn parameters(self) -> &'static ConstellationParameters {
        match self {
            Constellation::Gps => &GPS,
            Constellation::Glonass => &GLONASS,
            Constellation::Galileo => &GALILEO,
        }
    }

    /// Parse a catalogue key or display name, ignoring case.
    pub fn from_name(name: &str) -> Option<Constellation> {
        Self::ALL
            .into_iter()
            .find(|constellation| constellation.key().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fixed orbital constants of one constellation.
///
/// # Fields
/// * `orbital_frequency` - Satellite revolutions per day [cpd]
/// * `nodal_precession_frequency` - Drift of the ascending node [cpd], negative (regression)
/// * `ground_repeat_frequency` - Ground-track repeat rate [cpd]
/// * `sun_arg_lat_frequency` - Sun argument of latitude frequency [cpd], GLONASS and Galileo only
/// * `draconitic_frequency` - Node crossings relative to the Sun [cpd]
/// * `revolution_period_hours` - Satellite revolution period T_S [h]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationParameters {
    pub orbital_frequency: f64,
    pub nodal_precession_frequency: f64,
    pub ground_repeat_frequency: f64,
    pub sun_arg_lat_frequency: Option<f64>,
    pub draconitic_frequency: f64,
    pub revolution_period_hours: f64,
}

impl ConstellationParameters {
    /// Named base frequencies in catalogue order.
    pub fn base_frequencies(&self) -> Vec<(&'static str, f64)> {
        let mut entries = vec![
            ("orbital_frequency", self.orbital_frequency),
            ("nodal_precession_frequency", self.nodal_precession_frequency),
            ("ground_repeat_frequency", self.ground_repeat_frequency),
        ];
        if let Some(sun_arg_lat) = self.sun_arg_lat_frequency {
            entries.push(("sun_arg_lat_frequency", sun_arg_lat));
        }
        entries.push(("draconitic_frequency", self.draconitic_frequency));
        entries
    }
}
