//! emg-pipeline: Offline EMG windowing and feature extraction
//!
//! This library turns a directory of raw multi-channel EMG recordings into a
//! `(features, labels)` training set for a gesture classifier. It features:
//!
//! - Manifest-based corpus loading with a filename-convention scanner
//! - Sliding-window segmentation with validated geometry
//! - Deterministic time-domain feature extraction (MAV, ZC, SSC, WL, RMS, VAR)
//! - TOML-backed configuration with consistency validation
//!
//! The pipeline is batch, single-threaded and synchronous: load, slice and
//! extract run to completion before control returns, and each invocation is
//! independent and side-effect-free apart from file reads.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use emg_pipeline::{PipelineConfig, TrainingSession};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::default();
//!     let session = TrainingSession::open(config, "data/subject0")?;
//!
//!     let training_set = session.build_training_set()?;
//!     println!(
//!         "{} windows x {} feature dims",
//!         training_set.window_count(),
//!         training_set.feature_dims()
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod processing;
pub mod session;

// Re-export commonly used types for convenience
pub use config::{CorpusConfig, FeatureConfig, PipelineConfig, WindowingConfig};
pub use corpus::{Corpus, CorpusManifest, Recording, RecordingEntry};
pub use error::{PipelineError, PipelineResult};
pub use processing::{
    FeatureExtractor, FeatureKind, Window, WindowMetadata, WindowSlicer,
};
pub use session::{Labels, TrainingSession, TrainingSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
