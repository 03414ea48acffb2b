use std::path::Path;

use serde::Deserialize;

use crate::error::ConvictionResult;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScoringConfig {
    /// Highest raw score the upstream weighting can produce. Left unset on
    /// purpose when absent: normalization refuses to guess it.
    pub max_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            top_n: default_top_n(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

fn default_title() -> String {
    "Conviction Dashboard".to_string()
}
fn default_top_n() -> usize {
    10
}
fn default_refresh_secs() -> u64 {
    300
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> ConvictionResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Picks the max score from the CLI flag (or its env var) before the
    /// config file.
    pub fn resolve_max_score(&self, override_value: Option<f64>) -> Option<f64> {
        override_value.or(self.scoring.max_score)
    }
}
