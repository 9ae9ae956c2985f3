// src/config.rs

use crate::model::constants::{LEPTON_MASS_WINDOW_EV, PROTON_MASS_WINDOW_EV};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

fn default_lepton_window() -> f64 {
    LEPTON_MASS_WINDOW_EV
}

fn default_proton_window() -> f64 {
    PROTON_MASS_WINDOW_EV
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Tunables for mass/charge classification and mass lookup
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Electron and muon windows (eV)
    #[serde(default = "default_lepton_window")]
    pub lepton_window_ev: f64,

    /// Proton window (eV)
    #[serde(default = "default_proton_window")]
    pub proton_window_ev: f64,

    /// Fall back to A * u when no exact mass is tabulated
    #[serde(default = "default_true")]
    pub allow_approximation: bool,

    /// One of off/error/warn/info/debug/trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            lepton_window_ev: LEPTON_MASS_WINDOW_EV,
            proton_window_ev: PROTON_MASS_WINDOW_EV,
            allow_approximation: true,
            log_level: default_log_level(),
        }
    }
}

impl ResolverConfig {
    /// Loads config from standard OS location (e.g., ~/.config/pdg-resolve/settings.json)
    pub fn load() -> (Self, String) {
        Self::load_from(&Self::get_path())
    }

    /// Loads config from an explicit file, falling back to defaults
    pub fn load_from(path: &Path) -> (Self, String) {
        if !path.exists() {
            return (
                Self::default(),
                "No resolver settings found, using default mass windows".to_string(),
            );
        }
        let parsed = File::open(path)
            .map_err(|e| format!("Cannot open resolver settings {}: {}", path.display(), e))
            .and_then(|file| {
                serde_json::from_reader::<_, Self>(BufReader::new(file))
                    .map_err(|e| format!("Invalid resolver settings in {}: {}", path.display(), e))
            });
        match parsed {
            Ok(cfg) => (cfg, format!("Resolver settings read from {}", path.display())),
            Err(msg) => (Self::default(), msg),
        }
    }

    /// Saves config to standard OS location
    pub fn save(&self) -> String {
        self.save_to(&Self::get_path())
    }

    pub fn save_to(&self, path: &Path) -> String {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                return format!("Cannot create settings directory {}: {}", parent.display(), e);
            }
        }

        let written = File::create(path).map_err(|e| e.to_string()).and_then(|file| {
            serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|e| e.to_string())
        });
        match written {
            Ok(()) => format!("Resolver settings written to {}", path.display()),
            Err(e) => format!("Cannot write resolver settings {}: {}", path.display(), e),
        }
    }

    /// Parsed `log_level`, Info when unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn get_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("org", "pdg", "pdg-resolve") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}
