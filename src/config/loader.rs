// src/config/loader.rs
//! Configuration file loading
//!
//! A batch pipeline reads its configuration once per invocation, so loading
//! is a plain read-parse-validate sequence with no watching or reloading.

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use std::path::Path;
use tracing::info;

impl PipelineConfig {
    /// Load and validate a configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| PipelineError::ConfigFile {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let config = Self::from_toml_str(&contents).map_err(|err| match err {
            PipelineError::Configuration { reason } => PipelineError::ConfigFile {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        info!(
            path = %path.display(),
            window_size = config.windowing.window_size,
            window_increment = config.windowing.window_increment,
            features = ?config.features.names,
            "loaded pipeline configuration"
        );
        Ok(config)
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(contents: &str) -> PipelineResult<Self> {
        let config: PipelineConfig = toml::from_str(contents)
            .map_err(|err| PipelineError::configuration(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
            [windowing]
            window_size = 80
            window_increment = 20

            [features]
            names = ["MAV", "WL"]
            "#
        )
        .unwrap();

        let config = PipelineConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.windowing.window_size, 80);
        assert_eq!(config.windowing.window_increment, 20);
        assert_eq!(config.features.names, vec!["MAV", "WL"]);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = PipelineConfig::from_toml_file("/nonexistent/pipeline.toml").unwrap_err();
        assert!(matches!(err, PipelineError::ConfigFile { .. }));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.toml");
        std::fs::write(&path, "windowing = not valid").unwrap();

        let err = PipelineConfig::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, PipelineError::ConfigFile { .. }));
    }

    #[test]
    fn test_inconsistent_values_rejected_at_load() {
        let err = PipelineConfig::from_toml_str(
            r#"
            [windowing]
            window_size = 10
            window_increment = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Configuration { .. }));
    }
}
