// src/session.rs
//! Explicit training-session lifecycle
//!
//! A [`TrainingSession`] owns the validated configuration and the recording
//! manifest for one data directory. Each [`build_training_set`] call is an
//! independent, side-effect-free batch run: load, slice, extract, return.
//! Intermediate windows and feature rows are dropped when the call returns.
//!
//! [`build_training_set`]: TrainingSession::build_training_set

use crate::config::PipelineConfig;
use crate::corpus::{Corpus, CorpusManifest};
use crate::error::{PipelineError, PipelineResult};
use crate::processing::{FeatureExtractor, WindowSlicer};
use ndarray::Array2;
use std::path::Path;
use tracing::info;

/// Per-window labels, aligned 1:1 with the feature matrix rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    /// Gesture class of each window
    pub classes: Vec<u32>,
    /// Repetition of each window
    pub repetitions: Vec<u32>,
}

/// The in-memory structure handed to an external classifier-training call
#[derive(Debug, Clone)]
pub struct TrainingSet {
    /// Feature matrix, `windows × (features · channels)`
    pub features: Array2<f32>,
    /// Labels aligned with the matrix rows
    pub labels: Labels,
}

impl TrainingSet {
    /// Number of windows (matrix rows)
    pub fn window_count(&self) -> usize {
        self.features.nrows()
    }

    /// Feature dimensions per window (matrix columns)
    pub fn feature_dims(&self) -> usize {
        self.features.ncols()
    }
}

/// One offline pipeline session over one data directory
#[derive(Debug, Clone)]
pub struct TrainingSession {
    config: PipelineConfig,
    manifest: CorpusManifest,
}

impl TrainingSession {
    /// Open a session over a data directory.
    ///
    /// Validates the configuration first, then scans the directory into a
    /// manifest, so bad parameters fail before any file is touched.
    pub fn open<P: AsRef<Path>>(config: PipelineConfig, data_dir: P) -> PipelineResult<Self> {
        config.validate()?;
        let manifest = CorpusManifest::scan_directory(data_dir.as_ref(), &config.corpus)?;
        Ok(Self { config, manifest })
    }

    /// Open a session over an explicit manifest, bypassing the filename
    /// convention entirely.
    pub fn from_manifest(config: PipelineConfig, manifest: CorpusManifest) -> PipelineResult<Self> {
        config.validate()?;
        if manifest.is_empty() {
            return Err(PipelineError::configuration(
                "manifest contains no recordings",
            ));
        }
        Ok(Self { config, manifest })
    }

    /// The session's configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The session's recording manifest
    pub fn manifest(&self) -> &CorpusManifest {
        &self.manifest
    }

    /// Run the full pipeline: load, slice, extract.
    ///
    /// The slicer and extractor are constructed before the corpus is read,
    /// so parameter errors surface without touching the filesystem.
    pub fn build_training_set(&self) -> PipelineResult<TrainingSet> {
        let slicer = WindowSlicer::from_config(&self.config.windowing)?;
        let extractor = FeatureExtractor::new(&self.config.features)?;

        let corpus = Corpus::load(&self.manifest, self.config.corpus.delimiter)?;
        let (windows, metadata) = slicer.slice(&corpus);
        let features = extractor.extract(&windows)?;

        info!(
            windows = features.nrows(),
            dims = features.ncols(),
            "training set ready"
        );
        Ok(TrainingSet {
            features,
            labels: Labels {
                classes: metadata.classes,
                repetitions: metadata.repetitions,
            },
        })
    }
}
