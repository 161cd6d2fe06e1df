/// Alert configuration loader - parses baromon.toml
///
/// Separates the monitored location and tuning knobs from code, making it
/// easy to move the service, adjust thresholds, or change the output
/// shape without recompiling.

use serde::Deserialize;
use std::fs;

use crate::alert::compose::{AttachmentStyle, ComposeOptions};
use crate::analysis::trend::TrendConfig;
use crate::model::{DROP_THRESHOLD_IN_HG, RANGE_THRESHOLD_IN_HG, SPORADIC_CHANGE_THRESHOLD};

/// Full service configuration loaded from baromon.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    pub location: LocationConfig,

    // Tuning knobs, optional - defaults are the documented constants
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// The monitored geolocation. The forecast provider and the visualization
/// link both receive coordinates at 3-decimal precision (~100 m), which is
/// plenty for mean-sea-level pressure.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationConfig {
    pub fn lat_string(&self) -> String {
        format!("{:.3}", self.latitude)
    }

    pub fn lon_string(&self) -> String {
        format!("{:.3}", self.longitude)
    }
}

/// Analyzer threshold overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_drop_threshold")]
    pub drop_threshold_in_hg: f64,
    #[serde(default = "default_range_threshold")]
    pub range_threshold_in_hg: f64,
    #[serde(default = "default_sporadic_threshold")]
    pub sporadic_change_threshold: u32,
}

fn default_drop_threshold() -> f64 {
    DROP_THRESHOLD_IN_HG
}

fn default_range_threshold() -> f64 {
    RANGE_THRESHOLD_IN_HG
}

fn default_sporadic_threshold() -> u32 {
    SPORADIC_CHANGE_THRESHOLD
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            drop_threshold_in_hg: default_drop_threshold(),
            range_threshold_in_hg: default_range_threshold(),
            sporadic_change_threshold: default_sporadic_threshold(),
        }
    }
}

/// Output shaping: attachment style and which trailing lines to include.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub attachment: AttachmentChoice,
    #[serde(default = "default_true")]
    pub include_current_reading: bool,
    #[serde(default = "default_true")]
    pub include_reference_link: bool,
    #[serde(default = "default_true")]
    pub include_source_note: bool,
    #[serde(default = "default_true")]
    pub detect_sporadic: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            attachment: AttachmentChoice::None,
            include_current_reading: true,
            include_reference_link: true,
            include_source_note: true,
            detect_sporadic: true,
        }
    }
}

/// Attachment style as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentChoice {
    #[default]
    None,
    Chart,
    Link,
}

/// Loads the service configuration from baromon.toml.
///
/// # Panics
/// Panics if the configuration file is missing, malformed, or contains
/// invalid data. This is intentional — the service cannot operate without
/// a monitored location.
///
/// # File Location
/// Expects `baromon.toml` in the current working directory (project root
/// when running via `cargo run`).
pub fn load_config() -> AlertConfig {
    let config_path = "baromon.toml";

    let contents = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path, e));

    toml::from_str(&contents).unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e))
}

/// Converts threshold overrides from TOML to the analyzer's config type.
///
/// This adapter bridges the configuration layer and the analysis layer,
/// keeping the analyzer free of any serde/file concerns.
impl From<&ThresholdConfig> for TrendConfig {
    fn from(config: &ThresholdConfig) -> Self {
        TrendConfig {
            drop_threshold_in_hg: config.drop_threshold_in_hg,
            range_threshold_in_hg: config.range_threshold_in_hg,
            sporadic_change_threshold: config.sporadic_change_threshold,
        }
    }
}

/// Converts output shaping from TOML to the composer's options type.
impl From<&OutputConfig> for ComposeOptions {
    fn from(config: &OutputConfig) -> Self {
        ComposeOptions {
            attachment: match config.attachment {
                AttachmentChoice::None => AttachmentStyle::None,
                AttachmentChoice::Chart => AttachmentStyle::ChartImage,
                AttachmentChoice::Link => AttachmentStyle::VisualizationLink,
            },
            include_current_reading: config.include_current_reading,
            include_reference_link: config.include_reference_link,
            include_source_note: config.include_source_note,
            detect_sporadic: config.detect_sporadic,
        }
    }
}
