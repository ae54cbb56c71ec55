// src/error.rs
//! Unified error handling for the offline pipeline
//!
//! Every failure is terminal for the current pipeline run: there is no retry
//! and no partial-success mode. The caller surfaces the error and reruns the
//! whole operation. Training-data integrity matters more than partial
//! availability, so a single malformed row fails the entire load.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all pipeline operations
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No recording matched any allowed class/repetition combination.
    #[error("no usable recordings in {}: no file matched an allowed class/repetition", .directory.display())]
    DataNotFound {
        /// Directory that was scanned
        directory: PathBuf,
    },

    /// Invalid pipeline parameters, rejected before any file is touched.
    #[error("invalid configuration: {reason}")]
    Configuration {
        /// What was wrong with the parameters
        reason: String,
    },

    /// A recording file could not be parsed into a sample matrix.
    #[error("corrupt recording {}: {reason}", .path.display())]
    CorruptRecording {
        /// Offending file
        path: PathBuf,
        /// What was malformed, including the row where known
        reason: String,
    },

    /// A configured feature name is not recognized.
    #[error("unsupported feature {name:?}, supported features are {supported:?}")]
    UnsupportedFeature {
        /// The unrecognized name as configured
        name: String,
        /// Canonical names the extractor understands
        supported: &'static [&'static str],
    },

    /// Filesystem access failed while scanning or opening recordings.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be read or parsed.
    #[error("failed to load configuration {}: {reason}", .path.display())]
    ConfigFile {
        /// Configuration file path
        path: PathBuf,
        /// Read or parse failure detail
        reason: String,
    },
}

impl PipelineError {
    /// Build a [`PipelineError::Configuration`]
    pub fn configuration<S: Into<String>>(reason: S) -> Self {
        PipelineError::Configuration {
            reason: reason.into(),
        }
    }

    /// Build a [`PipelineError::CorruptRecording`]
    pub fn corrupt<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        PipelineError::CorruptRecording {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`PipelineError::Io`]
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = PipelineError::configuration("window_increment must be greater than zero");
        let display = format!("{}", err);
        assert!(display.contains("invalid configuration"));
        assert!(display.contains("window_increment"));
    }

    #[test]
    fn test_corrupt_recording_display() {
        let err = PipelineError::corrupt("data/R_0_C_2.csv", "row 7: expected 8 columns, found 6");
        let display = format!("{}", err);
        assert!(display.contains("R_0_C_2.csv"));
        assert!(display.contains("row 7"));
    }

    #[test]
    fn test_unsupported_feature_display() {
        let err = PipelineError::UnsupportedFeature {
            name: "MAVS".to_string(),
            supported: &["MAV", "ZC"],
        };
        let display = format!("{}", err);
        assert!(display.contains("MAVS"));
        assert!(display.contains("MAV"));
    }

    #[test]
    fn test_io_source_preserved() {
        use std::error::Error;

        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PipelineError::io("data/subject0", inner);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PipelineError>();
    }
}
