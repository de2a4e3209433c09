#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema and validation for the balance simulator.
//!
//! `Config` and sub-structs are deserialized from TOML; every section has
//! defaults matching the reference balance, so an empty file is valid.
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Nominal object masses in grams.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Masses {
    pub weight_small_g: f32,
    pub weight_medium_g: f32,
    pub weight_large_g: f32,
    pub rabbit_g: f32,
    pub cat_g: f32,
    pub powder_g: f32,
    pub petri_dish_g: f32,
    pub weighing_paper_g: f32,
}

impl Default for Masses {
    fn default() -> Self {
        Self {
            weight_small_g: 25.0,
            weight_medium_g: 50.0,
            weight_large_g: 100.0,
            rabbit_g: 75.5,
            cat_g: 123.0,
            powder_g: 50.8,
            petri_dish_g: 15.2,
            weighing_paper_g: 0.3,
        }
    }
}

impl Masses {
    fn all(&self) -> [f32; 8] {
        [
            self.weight_small_g,
            self.weight_medium_g,
            self.weight_large_g,
            self.rabbit_g,
            self.cat_g,
            self.powder_g,
            self.petri_dish_g,
            self.weighing_paper_g,
        ]
    }
}

/// Behavioral knobs for the simulated electronics.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Behavior {
    /// Power-on drift offset is drawn uniformly from ±this bound (grams).
    pub drift_bound_g: f32,
    /// Sustained settings press required to enter calibration mode (ms).
    pub hold_ms: u64,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            drift_bound_g: 0.2,
            hold_ms: 2000,
        }
    }
}

/// Pan drop-zone shape.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Pan {
    /// Top-edge inset as a fraction of the pan width, per side.
    pub top_inset_ratio: f32,
}

impl Default for Pan {
    fn default() -> Self {
        Self {
            top_inset_ratio: 0.2,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub masses: Masses,
    pub behavior: Behavior,
    pub pan: Pan,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    /// Reject values the engine cannot work with. Defaults always pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for m in self.masses.all() {
            if !m.is_finite() || m < 0.0 {
                return Err(ConfigError::Invalid(
                    "object masses must be finite and >= 0",
                ));
            }
        }
        if !self.behavior.drift_bound_g.is_finite() || self.behavior.drift_bound_g < 0.0 {
            return Err(ConfigError::Invalid("drift_bound_g must be >= 0"));
        }
        if self.behavior.hold_ms == 0 {
            return Err(ConfigError::Invalid("hold_ms must be >= 1"));
        }
        if !self.pan.top_inset_ratio.is_finite()
            || !(0.0..0.5).contains(&self.pan.top_inset_ratio)
        {
            return Err(ConfigError::Invalid(
                "top_inset_ratio must be in [0, 0.5)",
            ));
        }
        if let Some(rotation) = self.logging.rotation.as_deref()
            && !matches!(rotation, "never" | "daily" | "hourly")
        {
            return Err(ConfigError::Invalid(
                "logging.rotation must be never|daily|hourly",
            ));
        }
        Ok(())
    }
}
