//! Embedded physical constants of the frequency catalogue.
//!
//! Empirical values in cycles per day (cpd) unless stated otherwise. They are
//! taken as given; nothing in the crate derives or revises them.

use crate::catalogue::constellation::ConstellationParameters;
use crate::frequency::OrbitalHarmonic;

// -- Earth --

/// Earth angular speed ω_E (sidereal rotations per solar day).
pub const EARTH_ANGULAR_SPEED: f64 = 1.0027378;

/// Earth orbital frequency f_E (one cycle per year).
pub const EARTH_ORBITAL_FREQUENCY: f64 = 0.0027378;

/// Earth rotation (sidereal) period T_E [h].
pub const EARTH_ROTATION_PERIOD_HOURS: f64 = 23.9345;

// -- Constellations --

pub const GPS: ConstellationParameters = ConstellationParameters {
    orbital_frequency: 2.0057014,
    nodal_precession_frequency: -0.0001075,
    ground_repeat_frequency: 1.0028507,
    sun_arg_lat_frequency: None,
    draconitic_frequency: 0.0028453,
    revolution_period_hours: 11.967,
};

pub const GLONASS: ConstellationParameters = ConstellationParameters {
    orbital_frequency: 2.1310182,
    nodal_precession_frequency: -0.0000922,
    ground_repeat_frequency: 0.1253540,
    sun_arg_lat_frequency: Some(2.1281882),
    draconitic_frequency: 0.0028300,
    revolution_period_hours: 11.264,
};

pub const GALILEO: ConstellationParameters = ConstellationParameters {
    orbital_frequency: 1.7267000,
    nodal_precession_frequency: -0.0000726,
    ground_repeat_frequency: 0.1015706,
    sun_arg_lat_frequency: Some(1.7238896),
    draconitic_frequency: 0.0028104,
    revolution_period_hours: 14.077,
};

// -- Tides --

/// Tidal constituents as (name, frequency in cpd), in catalogue order.
pub const TIDES: &[(&str, f64)] = &[
    ("145_545", 0.9293886),
    ("OO_1", 0.9294198),
    ("O_1", 0.9295357),
    ("2N_2", 1.8596904),
    ("μ_2", 1.8645473),
    ("M_2", 1.9322734),
    ("M_m", 0.0362920),
    ("M_f", 0.0732027),
];

// -- Orbital signals --

/// (n, m) pairs carrying most of the orbital-signal power in subdaily solutions.
pub const ORBITAL_SIGNAL_HARMONICS: &[OrbitalHarmonic] = &[
    OrbitalHarmonic::new(-4, 1),
    OrbitalHarmonic::new(-3, 1),
    OrbitalHarmonic::new(-2, 1),
    OrbitalHarmonic::new(-1, 1),
    OrbitalHarmonic::new(0, 1),
    OrbitalHarmonic::new(1, 1),
    OrbitalHarmonic::new(2, 1),
    OrbitalHarmonic::new(-4, 2),
    OrbitalHarmonic::new(-3, 2),
    OrbitalHarmonic::new(-2, 2),
    OrbitalHarmonic::new(-1, 2),
    OrbitalHarmonic::new(0, 2),
    OrbitalHarmonic::new(1, 2),
    OrbitalHarmonic::new(2, 2),
    OrbitalHarmonic::new(-2, 3),
    OrbitalHarmonic::new(-1, 3),
    OrbitalHarmonic::new(0, 3),
    OrbitalHarmonic::new(1, 3),
    OrbitalHarmonic::new(-1, 4),
    OrbitalHarmonic::new(0, 4),
    OrbitalHarmonic::new(1, 4),
];
