// src/config/constants.rs
//! Named defaults for the pipeline configuration
//!
//! All serde defaults and `Default` impls pull from here so the crate has a
//! single source of truth for its numbers.

/// Windowing defaults
pub mod windowing {
    /// Samples per window
    pub const DEFAULT_WINDOW_SIZE: usize = 40;

    /// Samples advanced between consecutive windows
    pub const DEFAULT_WINDOW_INCREMENT: usize = 10;
}

/// Feature-extraction defaults
pub mod features {
    /// Default feature order handed to the classifier
    pub const DEFAULT_FEATURE_NAMES: &[&str] = &["MAV", "ZC", "SSC", "WL"];

    /// Deadband around zero for crossing and slope-change detection, so
    /// sensor noise does not register as activity
    pub const DEFAULT_DEADBAND_THRESHOLD: f32 = 0.001;
}

/// Corpus selection defaults and filename convention markers
pub mod corpus {
    /// Gesture classes included when scanning a data directory
    pub const DEFAULT_ALLOWED_CLASSES: &[u32] = &[0, 1, 2, 3, 4];

    /// Repetitions included when scanning a data directory
    pub const DEFAULT_ALLOWED_REPETITIONS: &[u32] = &[0, 1, 2];

    /// Cell delimiter in recording files
    pub const DEFAULT_DELIMITER: char = ',';

    /// Filename prefix in front of the repetition label
    pub const REPETITION_MARKER: &str = "R_";

    /// Filename marker between repetition and class labels
    pub const CLASS_MARKER: &str = "_C_";

    /// Filename suffix of a recording
    pub const RECORDING_SUFFIX: &str = ".csv";
}
