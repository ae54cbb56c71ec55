//! Ordered feature extraction over sliced windows
//!
//! The extractor reduces each window to one fixed-size numeric row:
//! for every configured feature, in declared order, one value per channel.
//! Columns are therefore grouped feature-major, then channel-major, which is
//! the layout the downstream classifier trains on.

pub mod time_domain;

use crate::config::FeatureConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::processing::windowing::Window;
use ndarray::{Array2, ArrayView1};
use std::str::FromStr;
use tracing::info;

/// Supported time-domain features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Mean Absolute Value
    Mav,
    /// Zero Crossings
    Zc,
    /// Slope Sign Changes
    Ssc,
    /// Waveform Length
    Wl,
    /// Root Mean Square
    Rms,
    /// Signal variance
    Var,
}

impl FeatureKind {
    /// Canonical names, in the order used in error messages
    pub const SUPPORTED: &'static [&'static str] = &["MAV", "ZC", "SSC", "WL", "RMS", "VAR"];

    /// Canonical uppercase name of this feature
    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::Mav => "MAV",
            FeatureKind::Zc => "ZC",
            FeatureKind::Ssc => "SSC",
            FeatureKind::Wl => "WL",
            FeatureKind::Rms => "RMS",
            FeatureKind::Var => "VAR",
        }
    }
}

impl FromStr for FeatureKind {
    type Err = PipelineError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "MAV" => Ok(FeatureKind::Mav),
            "ZC" => Ok(FeatureKind::Zc),
            "SSC" => Ok(FeatureKind::Ssc),
            "WL" => Ok(FeatureKind::Wl),
            "RMS" => Ok(FeatureKind::Rms),
            "VAR" => Ok(FeatureKind::Var),
            _ => Err(PipelineError::UnsupportedFeature {
                name: name.to_string(),
                supported: FeatureKind::SUPPORTED,
            }),
        }
    }
}

/// Feature extractor with a frozen, ordered feature list
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    kinds: Vec<FeatureKind>,
    deadband_threshold: f32,
}

impl FeatureExtractor {
    /// Parse the configured feature names, failing on the first unknown one
    pub fn new(config: &FeatureConfig) -> PipelineResult<Self> {
        if config.names.is_empty() {
            return Err(PipelineError::configuration(
                "at least one feature must be configured",
            ));
        }
        if !config.deadband_threshold.is_finite() || config.deadband_threshold < 0.0 {
            return Err(PipelineError::configuration(format!(
                "deadband_threshold ({}) must be finite and non-negative",
                config.deadband_threshold
            )));
        }

        let kinds = config
            .names
            .iter()
            .map(|name| name.parse())
            .collect::<PipelineResult<Vec<_>>>()?;

        Ok(Self {
            kinds,
            deadband_threshold: config.deadband_threshold,
        })
    }

    /// Configured features in extraction order
    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }

    /// Output columns per channel
    pub fn dims_per_channel(&self) -> usize {
        self.kinds.len()
    }

    /// Reduce every window to one feature row.
    ///
    /// Output shape is `windows × (features · channels)`. An empty window
    /// list produces an empty `0 × 0` matrix, which is what a corpus of
    /// all-too-short recordings legitimately slices down to.
    pub fn extract(&self, windows: &[Window]) -> PipelineResult<Array2<f32>> {
        let Some(first) = windows.first() else {
            return Ok(Array2::zeros((0, 0)));
        };

        let channels = first.channel_count();
        let dims = self.kinds.len() * channels;
        let mut features = Array2::zeros((windows.len(), dims));

        for (row, window) in windows.iter().enumerate() {
            if window.channel_count() != channels {
                return Err(PipelineError::configuration(format!(
                    "window {} has {} channels, expected {}",
                    row,
                    window.channel_count(),
                    channels
                )));
            }

            let mut column = 0;
            for kind in &self.kinds {
                for channel in 0..channels {
                    features[[row, column]] =
                        self.compute(*kind, window.samples.column(channel));
                    column += 1;
                }
            }
        }

        info!(
            windows = windows.len(),
            dims,
            features = ?self.kinds.iter().map(|k| k.name()).collect::<Vec<_>>(),
            "extracted feature matrix"
        );
        Ok(features)
    }

    fn compute(&self, kind: FeatureKind, channel: ArrayView1<'_, f32>) -> f32 {
        match kind {
            FeatureKind::Mav => time_domain::mean_absolute_value(channel),
            FeatureKind::Zc => time_domain::zero_crossings(channel, self.deadband_threshold),
            FeatureKind::Ssc => time_domain::slope_sign_changes(channel, self.deadband_threshold),
            FeatureKind::Wl => time_domain::waveform_length(channel),
            FeatureKind::Rms => time_domain::root_mean_square(channel),
            FeatureKind::Var => time_domain::variance(channel),
        }
    }
}
