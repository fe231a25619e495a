//! Application configuration.
//!
//! RULE: the controller never reads ambient state (environment,
//! browser-style storage). Everything it needs arrives through this
//! struct, built from defaults or loaded from a JSON file.

use crate::types::{Locale, Year};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The "now" anchoring the timeline. Defaults to the current
    /// calendar year.
    #[serde(default = "default_present_year")]
    pub present_year: Year,

    /// Default target year for future-word predictions.
    #[serde(default = "default_prediction_year")]
    pub prediction_year: Year,

    /// Years advanced per playback tick.
    #[serde(default = "default_playback_step_years")]
    pub playback_step_years: Year,

    /// Real-time period between playback ticks, for the embedding host.
    #[serde(default = "default_playback_tick_ms")]
    pub playback_tick_ms: u32,

    #[serde(default = "default_locale")]
    pub default_locale: Locale,

    /// Provider credentials. Absent keys select the fallback provider
    /// or the identity translator — never an error.
    #[serde(default)]
    pub llm_api_key: Option<String>,
    #[serde(default)]
    pub map_access_token: Option<String>,
    #[serde(default)]
    pub localization_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            present_year: default_present_year(),
            prediction_year: default_prediction_year(),
            playback_step_years: default_playback_step_years(),
            playback_tick_ms: default_playback_tick_ms(),
            default_locale: default_locale(),
            llm_api_key: None,
            map_access_token: None,
            localization_api_key: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {path}: {e}"))?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

fn default_present_year() -> Year {
    Utc::now().year()
}

fn default_prediction_year() -> Year {
    2050
}

fn default_playback_step_years() -> Year {
    5
}

fn default_playback_tick_ms() -> u32 {
    100
}

fn default_locale() -> Locale {
    "en".to_string()
}
