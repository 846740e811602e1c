//! Configuration for the Nexus and its operators.
//!
//! Every field has a default matching the stock demo, so a TOML file only
//! needs the values it changes:
//!
//! ```toml
//! [collapse]
//! threshold = 0.5
//!
//! [[entries]]
//! id = 1
//! title = "Quantum Truth"
//! content = "Reality is superposed until observed."
//! ```

use nexus_model::{default_seeds, Result, SeedEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NexusConfig {
    /// Entries the store is seeded with, in order.
    pub entries: Vec<SeedEntry>,
    pub collapse: CollapseConfig,
    pub temporal: TemporalConfig,
    pub ambient: AmbientConfig,
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            entries: default_seeds(),
            collapse: CollapseConfig::default(),
            temporal: TemporalConfig::default(),
            ambient: AmbientConfig::default(),
        }
    }
}

impl NexusConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check values serde cannot: the date format must be renderable.
    pub fn validate(&self) -> Result<()> {
        crate::temporal::check_date_format(&self.temporal.date_format)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// How often the presentation layer should call [`crate::Nexus::tick`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.ambient.tick_interval_ms)
    }
}

/// Configuration for [`crate::CollapseOperator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseConfig {
    /// Draws strictly above this resolve to a single value.
    pub threshold: f64,
    /// Characters of content quoted in the alternative rendering.
    pub alternative_prefix: usize,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            alternative_prefix: 30,
        }
    }
}

/// Configuration for [`crate::TemporalProjector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// chrono format string for the historical date.
    pub date_format: String,
    /// Characters of content shown as the present view.
    pub present_length: usize,
    /// Characters of content quoted in the future view.
    pub future_prefix: usize,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
            present_length: 50,
            future_prefix: 30,
        }
    }
}

/// Ambient activity driven by the presentation layer's timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    pub tick_interval_ms: u64,
    /// A tick pulses an entry when its draw lands above this value.
    pub pulse_threshold: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 3_000,
            pulse_threshold: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_model::{EntryId, NexusError};

    #[test]
    fn test_defaults() {
        let config = NexusConfig::default();
        assert_eq!(config.entries.len(), 4);
        assert_eq!(config.collapse.threshold, 0.8);
        assert_eq!(config.temporal.present_length, 50);
        assert_eq!(config.tick_interval(), Duration::from_secs(3));
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = NexusConfig::from_toml_str("").unwrap();
        assert_eq!(config, NexusConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = NexusConfig::from_toml_str(
            r#"
            [collapse]
            threshold = 0.5

            [[entries]]
            id = 10
            title = "Solo"
            content = "Only one entry here."
            "#,
        )
        .unwrap();

        assert_eq!(config.collapse.threshold, 0.5);
        assert_eq!(config.collapse.alternative_prefix, 30);
        assert_eq!(config.entries.len(), 1);
        assert_eq!(config.entries[0].id, EntryId(10));
        assert_eq!(config.ambient.pulse_threshold, 0.7);
    }

    #[test]
    fn test_round_trip() {
        let config = NexusConfig::default();
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(NexusConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            NexusConfig::from_toml_str("[collapse\nthreshold = 1"),
            Err(NexusError::Config(_))
        ));
        assert!(matches!(
            NexusConfig::from_toml_str("[collapse]\nthreshold = \"high\""),
            Err(NexusError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = NexusConfig::from_toml_str("[temporal]\ndate_format = \"%Q\"");
        assert!(matches!(result, Err(NexusError::InvalidDateFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = NexusConfig::load("/nonexistent/nexus.toml");
        assert!(matches!(result, Err(NexusError::Io(_))));
    }
}
