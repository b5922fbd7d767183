//! Configuration for the summarization engine

use crate::selector::SummaryOrder;
use serde::{Deserialize, Serialize};

/// Default selection ratio
pub const DEFAULT_RATIO: f64 = 0.3;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Stopword language code (e.g. "en")
    pub language: String,

    /// Ratio used when a request does not supply one
    pub default_ratio: f64,

    /// Output order used when a request does not supply one
    pub order: SummaryOrder,

    /// Extra stopwords merged into the language vocabulary
    pub extra_stopwords: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            default_ratio: DEFAULT_RATIO,
            order: SummaryOrder::ScoreDescending,
            extra_stopwords: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.language.trim().is_empty() {
            return Err("language must not be empty".to_string());
        }
        if !is_valid_ratio(self.default_ratio) {
            return Err(format!(
                "default_ratio must be in (0, 1], got {}",
                self.default_ratio
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

/// True for ratios in (0, 1]; NaN is rejected
pub fn is_valid_ratio(ratio: f64) -> bool {
    ratio > 0.0 && ratio <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_ratio, 0.3);
    }

    #[test]
    fn test_invalid_ratio() {
        let mut config = EngineConfig::default();
        config.default_ratio = 0.0;
        assert!(config.validate().is_err());
        config.default_ratio = 1.5;
        assert!(config.validate().is_err());
        config.default_ratio = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_language() {
        let config = EngineConfig {
            language: "  ".to_string(),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            order = "reading"
            extra_stopwords = ["lorem", "ipsum"]
            "#,
        )
        .unwrap();

        assert_eq!(config.language, "en");
        assert_eq!(config.default_ratio, 0.3);
        assert_eq!(config.order, SummaryOrder::Reading);
        assert_eq!(config.extra_stopwords, vec!["lorem", "ipsum"]);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig {
            language: "de".to_string(),
            default_ratio: 0.5,
            order: SummaryOrder::Reading,
            extra_stopwords: vec!["foo".to_string()],
        };
        let parsed = EngineConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
