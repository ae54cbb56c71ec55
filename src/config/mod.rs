// src/config/mod.rs
//! Pipeline configuration
//!
//! Externalizes what the original control panel kept as hardcoded constants:
//! window geometry, the ordered feature list, and the class/repetition
//! selection rules used when scanning a data directory.

pub mod constants;
pub mod loader;

pub use constants::*;

use crate::error::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};

/// Complete pipeline configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PipelineConfig {
    /// Corpus selection rules
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Window geometry
    #[serde(default)]
    pub windowing: WindowingConfig,

    /// Feature extraction settings
    #[serde(default)]
    pub features: FeatureConfig,
}

/// Selection rules applied while scanning a data directory
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorpusConfig {
    /// Gesture classes to include; files with other classes are skipped
    #[serde(default = "defaults::allowed_classes")]
    pub allowed_classes: Vec<u32>,

    /// Repetitions to include; files with other repetitions are skipped
    #[serde(default = "defaults::allowed_repetitions")]
    pub allowed_repetitions: Vec<u32>,

    /// Cell delimiter in recording files
    #[serde(default = "defaults::delimiter")]
    pub delimiter: char,
}

/// Sliding-window geometry
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WindowingConfig {
    /// Samples per window
    #[serde(default = "defaults::window_size")]
    pub window_size: usize,

    /// Samples advanced between consecutive windows; overlap is
    /// `window_size - window_increment`
    #[serde(default = "defaults::window_increment")]
    pub window_increment: usize,
}

/// Feature extraction settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeatureConfig {
    /// Ordered feature names; output columns follow this order
    #[serde(default = "defaults::feature_names")]
    pub names: Vec<String>,

    /// Deadband around zero for ZC/SSC detection
    #[serde(default = "defaults::deadband_threshold")]
    pub deadband_threshold: f32,
}

/// Default value providers using constants
mod defaults {
    use crate::config::constants::*;

    pub fn allowed_classes() -> Vec<u32> {
        corpus::DEFAULT_ALLOWED_CLASSES.to_vec()
    }
    pub fn allowed_repetitions() -> Vec<u32> {
        corpus::DEFAULT_ALLOWED_REPETITIONS.to_vec()
    }
    pub fn delimiter() -> char {
        corpus::DEFAULT_DELIMITER
    }

    pub fn window_size() -> usize {
        windowing::DEFAULT_WINDOW_SIZE
    }
    pub fn window_increment() -> usize {
        windowing::DEFAULT_WINDOW_INCREMENT
    }

    pub fn feature_names() -> Vec<String> {
        features::DEFAULT_FEATURE_NAMES
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
    pub fn deadband_threshold() -> f32 {
        features::DEFAULT_DEADBAND_THRESHOLD
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            allowed_classes: defaults::allowed_classes(),
            allowed_repetitions: defaults::allowed_repetitions(),
            delimiter: defaults::delimiter(),
        }
    }
}

impl Default for WindowingConfig {
    fn default() -> Self {
        Self {
            window_size: defaults::window_size(),
            window_increment: defaults::window_increment(),
        }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            names: defaults::feature_names(),
            deadband_threshold: defaults::deadband_threshold(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            windowing: WindowingConfig::default(),
            features: FeatureConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Validate configuration consistency, collecting every violation
    pub fn validate_consistency(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.windowing.window_size == 0 {
            errors.push("window_size must be greater than zero".to_string());
        }
        if self.windowing.window_increment == 0 {
            errors.push("window_increment must be greater than zero".to_string());
        }
        if self.windowing.window_increment > self.windowing.window_size
            && self.windowing.window_size > 0
        {
            errors.push(format!(
                "window_increment ({}) must not exceed window_size ({})",
                self.windowing.window_increment, self.windowing.window_size
            ));
        }

        if self.features.names.is_empty() {
            errors.push("at least one feature must be configured".to_string());
        }
        if !self.features.deadband_threshold.is_finite() || self.features.deadband_threshold < 0.0 {
            errors.push(format!(
                "deadband_threshold ({}) must be finite and non-negative",
                self.features.deadband_threshold
            ));
        }

        if self.corpus.allowed_classes.is_empty() {
            errors.push("allowed_classes must not be empty".to_string());
        }
        if self.corpus.allowed_repetitions.is_empty() {
            errors.push("allowed_repetitions must not be empty".to_string());
        }
        if !self.corpus.delimiter.is_ascii() {
            errors.push(format!(
                "delimiter ({:?}) must be a single ASCII character",
                self.corpus.delimiter
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every violation into one [`PipelineError::Configuration`]
    pub fn validate(&self) -> PipelineResult<()> {
        self.validate_consistency()
            .map_err(|errors| PipelineError::configuration(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_consistent() {
        let config = PipelineConfig::default();
        assert_eq!(config.windowing.window_size, windowing::DEFAULT_WINDOW_SIZE);
        assert_eq!(
            config.windowing.window_increment,
            windowing::DEFAULT_WINDOW_INCREMENT
        );
        assert_eq!(config.features.names, vec!["MAV", "ZC", "SSC", "WL"]);
        assert!(config.validate_consistency().is_ok());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = PipelineConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: PipelineConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            config.windowing.window_size,
            deserialized.windowing.window_size
        );
        assert_eq!(config.features.names, deserialized.features.names);
        assert_eq!(config.corpus.delimiter, deserialized.corpus.delimiter);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PipelineConfig = toml::from_str(
            r#"
            [windowing]
            window_size = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.windowing.window_size, 100);
        assert_eq!(
            config.windowing.window_increment,
            windowing::DEFAULT_WINDOW_INCREMENT
        );
        assert_eq!(config.features.names, vec!["MAV", "ZC", "SSC", "WL"]);
    }

    #[test]
    fn test_zero_increment_rejected() {
        let mut config = PipelineConfig::default();
        config.windowing.window_increment = 0;

        let errors = config.validate_consistency().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("window_increment")));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_increment_above_size_rejected() {
        let mut config = PipelineConfig::default();
        config.windowing.window_size = 10;
        config.windowing.window_increment = 20;

        assert!(config.validate_consistency().is_err());
    }

    #[test]
    fn test_all_violations_collected() {
        let mut config = PipelineConfig::default();
        config.windowing.window_increment = 0;
        config.features.names.clear();
        config.corpus.allowed_classes.clear();

        let errors = config.validate_consistency().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
