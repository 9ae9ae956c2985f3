// src/model/constants.rs

//! Rest masses in eV/c², CODATA 2018 values.

/// Atomic mass unit
pub const U_MASS_EV: f64 = 931_494_102.42;

/// Proton rest mass
pub const PROTON_MASS_EV: f64 = 938_272_088.16;

/// Electron rest mass
pub const ELECTRON_MASS_EV: f64 = 510_998.95;

/// Muon rest mass
pub const MUON_MASS_EV: f64 = 105_658_375.5;

/// Fully stripped lead-208 nucleus
pub const PB208_MASS_EV: f64 = 193_729_024_900.0;

/// Half-width of the electron and muon mass windows used for classification
pub const LEPTON_MASS_WINDOW_EV: f64 = 100.0;

/// Half-width of the proton mass window used for classification
pub const PROTON_MASS_WINDOW_EV: f64 = 1000.0;
