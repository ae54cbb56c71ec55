// src/processing/windowing.rs
//! Sliding-window segmentation of a recorded corpus
//!
//! Windows are fixed-length slices of one recording's sample matrix,
//! advanced by `window_increment` samples. Windows never cross recording
//! boundaries; a recording shorter than one window contributes nothing.

use crate::config::WindowingConfig;
use crate::corpus::Corpus;
use crate::error::{PipelineError, PipelineResult};
use ndarray::{s, Array2};
use tracing::{debug, info};

/// One fixed-length contiguous slice of a recording
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Window samples, `window_size` rows × channel columns
    pub samples: Array2<f32>,
}

impl Window {
    /// Number of samples in the window
    pub fn len(&self) -> usize {
        self.samples.nrows()
    }

    /// Whether the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.nrows() == 0
    }

    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.samples.ncols()
    }
}

/// Labels aligned 1:1 with the emitted windows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowMetadata {
    /// Class label of each window's originating recording
    pub classes: Vec<u32>,
    /// Repetition label of each window's originating recording
    pub repetitions: Vec<u32>,
}

impl WindowMetadata {
    /// Number of labeled windows
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no windows were labeled
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Sliding-window slicer with validated geometry
#[derive(Debug, Clone, Copy)]
pub struct WindowSlicer {
    window_size: usize,
    window_increment: usize,
}

impl WindowSlicer {
    /// Create a slicer, rejecting invalid geometry before any data is touched
    pub fn new(window_size: usize, window_increment: usize) -> PipelineResult<Self> {
        if window_size == 0 {
            return Err(PipelineError::configuration(
                "window_size must be greater than zero",
            ));
        }
        if window_increment == 0 {
            return Err(PipelineError::configuration(
                "window_increment must be greater than zero",
            ));
        }
        if window_increment > window_size {
            return Err(PipelineError::configuration(format!(
                "window_increment ({}) must not exceed window_size ({})",
                window_increment, window_size
            )));
        }

        Ok(Self {
            window_size,
            window_increment,
        })
    }

    /// Create a slicer from the windowing configuration section
    pub fn from_config(config: &WindowingConfig) -> PipelineResult<Self> {
        Self::new(config.window_size, config.window_increment)
    }

    /// Samples per window
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Samples advanced between consecutive windows
    pub fn window_increment(&self) -> usize {
        self.window_increment
    }

    /// Number of windows a recording of `sample_count` samples yields
    pub fn window_count(&self, sample_count: usize) -> usize {
        if sample_count < self.window_size {
            0
        } else {
            (sample_count - self.window_size) / self.window_increment + 1
        }
    }

    /// Slice every recording into overlapping windows.
    ///
    /// Emission order is recording order, then temporal order within each
    /// recording. The metadata arrays are aligned 1:1 with the windows.
    pub fn slice(&self, corpus: &Corpus) -> (Vec<Window>, WindowMetadata) {
        let mut windows = Vec::new();
        let mut metadata = WindowMetadata::default();

        for recording in corpus.recordings() {
            let count = self.window_count(recording.sample_count());
            if count == 0 {
                debug!(
                    source = %recording.source.display(),
                    samples = recording.sample_count(),
                    window_size = self.window_size,
                    "recording shorter than one window, contributes nothing"
                );
                continue;
            }

            for index in 0..count {
                let start = index * self.window_increment;
                let samples = recording
                    .samples
                    .slice(s![start..start + self.window_size, ..])
                    .to_owned();
                windows.push(Window { samples });
                metadata.classes.push(recording.class);
                metadata.repetitions.push(recording.repetition);
            }
        }

        info!(windows = windows.len(), "sliced corpus into windows");
        (windows, metadata)
    }
}
