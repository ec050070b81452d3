use log::debug;

use crate::catalogue::constants::{
    EARTH_ANGULAR_SPEED, EARTH_ORBITAL_FREQUENCY, EARTH_ROTATION_PERIOD_HOURS,
    ORBITAL_SIGNAL_HARMONICS, TIDES,
};
use crate::catalogue::constellation::{Constellation, ConstellationParameters};
use crate::catalogue::frequency_node::FrequencyNode;
use crate::config::{
    ANNUAL_HARMONIC_COUNT, DAILY_REFERENCE_FREQUENCY, DEFAULT_PEAK_HARMONIC_RANGE,
    DEFAULT_SAMPLING_INTERVAL_HOURS, DRACONITIC_HARMONIC_COUNT,
};
use crate::frequency::{
    HarmonicSeries, OrbitalHarmonic, OrbitalPeaks, alias_against_reference, classify_peaks,
    frequency_to_period, harmonics, period_hours_to_frequency, subdaily_alias,
};

/// Earth reference frequencies [cpd].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthFrequencies {
    pub angular_speed: f64,
    pub orbital_frequency: f64,
}

/// Orbital beat signal of one (n, m) pair and its appearance in sampled solutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSignal {
    pub harmonic: OrbitalHarmonic,
    pub orbital_period_hours: f64,
    pub frequency_cpd: f64,
    pub aliased_frequency_cpd: f64,
    pub aliased_period_days: f64,
}

impl OrbitalSignal {
    /// Evaluate `harmonic` for the given periods [h] and sampling interval [h].
    ///
    /// Returns `None` when the beat period is undefined or not strictly positive.
    pub fn compute(
        harmonic: OrbitalHarmonic,
        satellite_period_hours: f64,
        earth_period_hours: f64,
        sampling_interval_hours: f64,
    ) -> Option<Self> {
        let orbital_period_hours = harmonic.period(satellite_period_hours, earth_period_hours);
        if !(orbital_period_hours.is_finite() && orbital_period_hours > 0.0) {
            return None;
        }

        let frequency_cpd = period_hours_to_frequency(orbital_period_hours);
        let aliased_frequency_cpd = subdaily_alias(frequency_cpd, sampling_interval_hours);

        Some(Self {
            harmonic,
            orbital_period_hours,
            frequency_cpd,
            aliased_frequency_cpd,
            aliased_period_days: frequency_to_period(aliased_frequency_cpd),
        })
    }

    fn to_node(&self) -> FrequencyNode {
        [
            ("orbital_period_hours", FrequencyNode::Value(self.orbital_period_hours)),
            ("frequency_cpd", FrequencyNode::Value(self.frequency_cpd)),
            ("aliased_frequency_cpd", FrequencyNode::Value(self.aliased_frequency_cpd)),
            ("aliased_period_days", FrequencyNode::Value(self.aliased_period_days)),
        ]
        .into_iter()
        .collect()
    }
}

/// Everything the catalogue records for one constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationFrequencies {
    pub constellation: Constellation,
    pub parameters: ConstellationParameters,
    pub draconitic_harmonics: HarmonicSeries,
    /// Present only for constellations with a sun argument of latitude frequency.
    pub orbital_peaks: Option<OrbitalPeaks>,
    pub orbital_signals: Vec<OrbitalSignal>,
}

impl ConstellationFrequencies {
    /// Total number of peaks over all bands (0 without peaks).
    pub fn peak_count(&self) -> usize {
        self.orbital_peaks
            .as_ref()
            .map_or(0, |peaks| peaks.values().map(Vec::len).sum())
    }

    pub fn signal(&self, harmonic: OrbitalHarmonic) -> Option<&OrbitalSignal> {
        self.orbital_signals
            .iter()
            .find(|signal| signal.harmonic == harmonic)
    }

    fn to_node(&self) -> FrequencyNode {
        let mut entries: Vec<(String, FrequencyNode)> = self
            .parameters
            .base_frequencies()
            .into_iter()
            .map(|(name, value)| (name.to_string(), FrequencyNode::Value(value)))
            .collect();

        entries.push((
            "draconitic_harmonics".to_string(),
            harmonic_series_node(&self.draconitic_harmonics),
        ));

        if let Some(peaks) = &self.orbital_peaks {
            let bands: FrequencyNode = peaks
                .iter()
                .map(|(band, band_peaks)| {
                    let peaks_node: FrequencyNode = band_peaks
                        .iter()
                        .map(|peak| (peak.label(), FrequencyNode::Value(peak.frequency)))
                        .collect();
                    (band.key(), peaks_node)
                })
                .collect();
            entries.push(("orbital_peaks".to_string(), bands));
        }

        let signals: FrequencyNode = self
            .orbital_signals
            .iter()
            .map(|signal| (signal.harmonic.label(), signal.to_node()))
            .collect();
        entries.push(("orbital_signals".to_string(), signals));

        FrequencyNode::Table(entries)
    }
}

/// Reference frequency a tide is folded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasReference {
    /// Daily sampling, 1 cpd
    Daily,
    /// Ground-repeat frequency of a constellation
    GroundRepeat(Constellation),
}

impl AliasReference {
    pub fn frequency(self) -> f64 {
        match self {
            AliasReference::Daily => DAILY_REFERENCE_FREQUENCY,
            AliasReference::GroundRepeat(constellation) => {
                constellation.parameters().ground_repeat_frequency
            }
        }
    }

    /// Key suffix: `daily`, `gps`, `galileo` or `glonass`.
    pub fn suffix(self) -> &'static str {
        match self {
            AliasReference::Daily => "daily",
            AliasReference::GroundRepeat(constellation) => constellation.key(),
        }
    }
}

/// Named tidal constituent [cpd].
#[derive(Debug, Clone, PartialEq)]
pub struct TidalFrequency {
    pub name: String,
    pub frequency: f64,
}

/// Alias of a tidal constituent against one reference frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct TidalAlias {
    pub tide: String,
    pub reference: AliasReference,
    pub frequency: f64,
}

impl TidalAlias {
    pub fn new(tide: &str, tide_frequency: f64, reference: AliasReference) -> Self {
        Self {
            tide: tide.to_string(),
            reference,
            frequency: alias_against_reference(tide_frequency, reference.frequency()),
        }
    }

    /// Catalogue key, e.g. `M_2_glonass`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.tide, self.reference.suffix())
    }
}

/// The assembled, read-only frequency catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyCatalogue {
    pub earth: EarthFrequencies,
    pub gps: ConstellationFrequencies,
    pub glonass: ConstellationFrequencies,
    pub galileo: ConstellationFrequencies,
    pub tides: Vec<TidalFrequency>,
    pub annual: HarmonicSeries,
    pub aliases: Vec<TidalAlias>,
}

impl FrequencyCatalogue {
    pub fn constellation(&self, constellation: Constellation) -> &ConstellationFrequencies {
        match constellation {
            Constellation::Gps => &self.gps,
            Constellation::Glonass => &self.glonass,
            Constellation::Galileo => &self.galileo,
        }
    }

    /// Constellations in catalogue order.
    pub fn constellations(&self) -> [&ConstellationFrequencies; 3] {
        [&self.gps, &self.glonass, &self.galileo]
    }

    /// Alias frequency by catalogue key, e.g. `O_1_daily`.
    pub fn alias(&self, key: &str) -> Option<f64> {
        self.aliases
            .iter()
            .find(|alias| alias.key() == key)
            .map(|alias| alias.frequency)
    }

    /// Nested mapping keyed by `earth`, `gps`, `glonass`, `galileo`, `tides`, `annual`, `aliases`.
    pub fn to_node(&self) -> FrequencyNode {
        let earth: FrequencyNode = [
            ("angular_speed", FrequencyNode::Value(self.earth.angular_speed)),
            ("orbital_frequency", FrequencyNode::Value(self.earth.orbital_frequency)),
        ]
        .into_iter()
        .collect();

        let tides: FrequencyNode = self
            .tides
            .iter()
            .map(|tide| (tide.name.clone(), FrequencyNode::Value(tide.frequency)))
            .collect();

        let aliases: FrequencyNode = self
            .aliases
            .iter()
            .map(|alias| (alias.key(), FrequencyNode::Value(alias.frequency)))
            .collect();

        [
            ("earth", earth),
            ("gps", self.gps.to_node()),
            ("glonass", self.glonass.to_node()),
            ("galileo", self.galileo.to_node()),
            ("tides", tides),
            ("annual", harmonic_series_node(&self.annual)),
            ("aliases", aliases),
        ]
        .into_iter()
        .collect()
    }
}

fn harmonic_series_node(series: &HarmonicSeries) -> FrequencyNode {
    series
        .iter()
        .map(|(index, frequency)| (index.to_string(), FrequencyNode::Value(*frequency)))
        .collect()
}

/// Orbital signals of one constellation for every pair in [`ORBITAL_SIGNAL_HARMONICS`].
///
/// Pairs with an undefined beat period are left out.
pub fn orbital_signals(
    parameters: &ConstellationParameters,
    sampling_interval_hours: f64,
) -> Vec<OrbitalSignal> {
    ORBITAL_SIGNAL_HARMONICS
        .iter()
        .filter_map(|&harmonic| {
            let signal = OrbitalSignal::compute(
                harmonic,
                parameters.revolution_period_hours,
                EARTH_ROTATION_PERIOD_HOURS,
                sampling_interval_hours,
            );
            if signal.is_none() {
                debug!("Skipping orbital signal {}: undefined beat period", harmonic);
            }
            signal
        })
        .collect()
}

/// Every tide folded against 1 cpd and against each constellation's ground-repeat frequency.
pub fn tidal_aliases(tides: &[TidalFrequency]) -> Vec<TidalAlias> {
    let mut aliases = Vec::with_capacity(tides.len() * (1 + Constellation::ALIAS_ORDER.len()));

    for tide in tides {
        aliases.push(TidalAlias::new(&tide.name, tide.frequency, AliasReference::Daily));
        for constellation in Constellation::ALIAS_ORDER {
            aliases.push(TidalAlias::new(
                &tide.name,
                tide.frequency,
                AliasReference::GroundRepeat(constellation),
            ));
        }
    }

    aliases
}

fn build_constellation(constellation: Constellation) -> ConstellationFrequencies {
    let parameters = *constellation.parameters();

    let orbital_peaks = parameters.sun_arg_lat_frequency.map(|sun_arg_lat| {
        classify_peaks(
            sun_arg_lat,
            parameters.draconitic_frequency,
            DEFAULT_PEAK_HARMONIC_RANGE,
        )
    });

    let frequencies = ConstellationFrequencies {
        constellation,
        parameters,
        draconitic_harmonics: harmonics(parameters.draconitic_frequency, DRACONITIC_HARMONIC_COUNT),
        orbital_peaks,
        orbital_signals: orbital_signals(&parameters, DEFAULT_SAMPLING_INTERVAL_HOURS),
    };

    debug!(
        "{}: {} draconitic harmonics, {} orbital peaks, {} orbital signals",
        constellation,
        frequencies.draconitic_harmonics.len(),
        frequencies.peak_count(),
        frequencies.orbital_signals.len()
    );

    frequencies
}

/// Assemble the complete catalogue from the embedded constants.
///
/// Pure and deterministic: repeated calls produce identical catalogues.
pub fn build_catalogue() -> FrequencyCatalogue {
    debug!("Assembling frequency catalogue");

    let tides: Vec<TidalFrequency> = TIDES
        .iter()
        .map(|&(name, frequency)| TidalFrequency {
            name: name.to_string(),
            frequency,
        })
        .collect();
    let aliases = tidal_aliases(&tides);

    let catalogue = FrequencyCatalogue {
        earth: EarthFrequencies {
            angular_speed: EARTH_ANGULAR_SPEED,
            orbital_frequency: EARTH_ORBITAL_FREQUENCY,
        },
        gps: build_constellation(Constellation::Gps),
        glonass: build_constellation(Constellation::Glonass),
        galileo: build_constellation(Constellation::Galileo),
        tides,
        annual: harmonics(EARTH_ORBITAL_FREQUENCY, ANNUAL_HARMONIC_COUNT),
        aliases,
    };

    debug!(
        "Catalogue assembled: {} tides, {} annual harmonics, {} aliases",
        catalogue.tides.len(),
        catalogue.annual.len(),
        catalogue.aliases.len()
    );

    catalogue
}
