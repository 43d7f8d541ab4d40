//! Configuration loading for the CLI.
//!
//! Advisory thresholds default to the fixed values in [`crate::advisor`] and
//! can be overridden per project through a `.wearmap.toml` file. The stats
//! windows (idle cutoff, wear-trend length) are deliberately not
//! configurable; they are part of the snapshot's meaning.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::advisor;

pub const CONFIG_FILE_NAME: &str = ".wearmap.toml";

/// Advisory rule thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Idle share of the wardrobe above which to flag (0.0-1.0).
    #[serde(default = "default_idle_ratio")]
    pub idle_ratio: f64,

    /// Single-category share above which to flag imbalance (0.0-1.0).
    #[serde(default = "default_category_share")]
    pub category_share: f64,

    /// Minimum outfit count before the outfit advisory stops firing.
    #[serde(default = "default_min_outfits")]
    pub min_outfits: usize,

    /// Price above which an item counts as expensive.
    #[serde(default = "default_high_price")]
    pub high_price: f64,

    /// Use count below which an expensive item counts as low-ROI.
    #[serde(default = "default_low_use")]
    pub low_use: u32,

    /// Minimum item count for the upcoming season.
    #[serde(default = "default_next_season_min")]
    pub next_season_min: usize,

    /// Minimum number of distinct brands.
    #[serde(default = "default_min_brands")]
    pub min_brands: usize,

    /// Utilization percentage below which to flag.
    #[serde(default = "default_min_utilization")]
    pub min_utilization: f64,
}

fn default_idle_ratio() -> f64 {
    advisor::IDLE_RATIO_THRESHOLD
}

fn default_category_share() -> f64 {
    advisor::CATEGORY_SHARE_THRESHOLD
}

fn default_min_outfits() -> usize {
    advisor::MIN_OUTFITS
}

fn default_high_price() -> f64 {
    advisor::HIGH_PRICE_THRESHOLD
}

fn default_low_use() -> u32 {
    advisor::LOW_USE_THRESHOLD
}

fn default_next_season_min() -> usize {
    advisor::NEXT_SEASON_MIN_ITEMS
}

fn default_min_brands() -> usize {
    advisor::MIN_DISTINCT_BRANDS
}

fn default_min_utilization() -> f64 {
    advisor::MIN_UTILIZATION_RATE
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            idle_ratio: default_idle_ratio(),
            category_share: default_category_share(),
            min_outfits: default_min_outfits(),
            high_price: default_high_price(),
            low_use: default_low_use(),
            next_season_min: default_next_season_min(),
            min_brands: default_min_brands(),
            min_utilization: default_min_utilization(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WearmapConfig {
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl WearmapConfig {
    /// Loads config from `path`, or from `.wearmap.toml` in the working
    /// directory. A missing file yields the defaults; a malformed file is an
    /// error, not a silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if !default.exists() {
                    log::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
