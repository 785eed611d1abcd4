//! Build presets - slider values and budget weights loaded from TOML

use super::{ConfigError, InputRanges};
use crate::allocation::{cube_weights, rectangle_weights, BucketWeight};
use crate::engine::BuildInput;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Budget section of a preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPreset {
    /// Total mod capacity in percent
    #[serde(default = "default_capacity")]
    pub capacity: f64,
    /// Weights for the base/elemental split
    #[serde(default = "default_rectangle")]
    pub rectangle: Vec<BucketWeight>,
    /// Weights for the base/elemental/multishot split
    #[serde(default = "default_cube")]
    pub cube: Vec<BucketWeight>,
}

impl Default for BudgetPreset {
    fn default() -> Self {
        BudgetPreset {
            capacity: default_capacity(),
            rectangle: default_rectangle(),
            cube: default_cube(),
        }
    }
}

fn default_capacity() -> f64 {
    330.0
}
fn default_rectangle() -> Vec<BucketWeight> {
    rectangle_weights(1.0, 1.0)
}
fn default_cube() -> Vec<BucketWeight> {
    cube_weights(1.0, 1.0, 1.0)
}
fn default_name() -> String {
    "Custom".to_string()
}

/// A complete starting point for the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPreset {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub build: BuildInput,
    #[serde(default)]
    pub budget: BudgetPreset,
    #[serde(default)]
    pub ranges: InputRanges,
}

impl Default for BuildPreset {
    fn default() -> Self {
        BuildPreset {
            name: default_name(),
            build: BuildInput::default(),
            budget: BudgetPreset::default(),
            ranges: InputRanges::default(),
        }
    }
}

impl BuildPreset {
    /// Check the preset against its own slider ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, range) in self.ranges.named() {
            if range.min.is_nan() || range.max.is_nan() || range.min > range.max {
                return Err(ConfigError::ValidationError(format!(
                    "range for {} has min {} above max {}",
                    field, range.min, range.max
                )));
            }
            if range.step.is_nan() || range.step <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "range for {} needs a positive step, got {}",
                    field, range.step
                )));
            }
        }

        let b = &self.build;
        let r = &self.ranges;
        let checks = [
            ("base_percent", b.base_percent, &r.base_percent),
            ("elemental_percent", b.elemental_percent, &r.elemental_percent),
            ("multishot_percent", b.multishot_percent, &r.multishot_percent),
            ("crit_chance_percent", b.crit_chance_percent, &r.crit_chance_percent),
            ("crit_multiplier", b.crit_multiplier, &r.crit_multiplier),
            ("fire_rate", b.fire_rate, &r.fire_rate),
            ("capacity", self.budget.capacity, &r.capacity),
        ];
        for (field, value, range) in checks {
            if !range.contains(value) {
                return Err(ConfigError::ValidationError(format!(
                    "{} = {} is outside {}..={}",
                    field, value, range.min, range.max
                )));
            }
        }

        for (set, weights) in [("rectangle", &self.budget.rectangle), ("cube", &self.budget.cube)] {
            for w in weights {
                if !r.weight.contains(w.weight) {
                    return Err(ConfigError::ValidationError(format!(
                        "budget.{} weight for {} = {} is outside {}..={}",
                        set, w.name, w.weight, r.weight.min, r.weight.max
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Load and validate a preset file
pub fn load_preset(path: &Path) -> Result<BuildPreset, ConfigError> {
    let preset: BuildPreset = super::load_toml(path)?;
    preset.validate()?;
    log::info!("loaded preset '{}' from {}", preset.name, path.display());
    Ok(preset)
}

/// Parse and validate a preset from a TOML string
pub fn parse_preset(content: &str) -> Result<BuildPreset, ConfigError> {
    let preset: BuildPreset = super::parse_toml(content)?;
    preset.validate()?;
    Ok(preset)
}

/// The built-in starting build
pub fn default_preset() -> BuildPreset {
    let toml = include_str!("../../config/default_preset.toml");
    parse_preset(toml).unwrap_or_else(|e| {
        log::warn!("built-in preset failed to load ({}), using defaults", e);
        BuildPreset::default()
    })
}
