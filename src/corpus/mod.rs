// src/corpus/mod.rs
//! Labeled corpus of raw signal recordings
//!
//! A [`Corpus`] is loaded once per pipeline invocation from a
//! [`CorpusManifest`] and holds one sample matrix per recording. Any
//! malformed row fails the whole load; there is no partial recovery.

pub mod manifest;

pub use manifest::{CorpusManifest, RecordingEntry};

use crate::error::{PipelineError, PipelineResult};
use ndarray::Array2;
use std::path::{Path, PathBuf};
use tracing::info;

/// One raw multi-channel recording with its labels
#[derive(Debug, Clone)]
pub struct Recording {
    /// Gesture class label
    pub class: u32,
    /// Repetition label
    pub repetition: u32,
    /// Sample matrix, rows are samples and columns are channels
    pub samples: Array2<f32>,
    /// File the samples came from
    pub source: PathBuf,
}

impl Recording {
    /// Number of samples (rows)
    pub fn sample_count(&self) -> usize {
        self.samples.nrows()
    }

    /// Number of channels (columns)
    pub fn channel_count(&self) -> usize {
        self.samples.ncols()
    }
}

/// Ordered collection of loaded recordings
#[derive(Debug, Clone)]
pub struct Corpus {
    recordings: Vec<Recording>,
}

impl Corpus {
    /// Load every manifest entry into memory.
    ///
    /// The first recording fixes the corpus channel count; a recording with a
    /// different width fails the load, since a fixed-size feature vector is
    /// impossible over mixed widths. The delimiter must be a single ASCII
    /// character.
    pub fn load(manifest: &CorpusManifest, delimiter: char) -> PipelineResult<Self> {
        if !delimiter.is_ascii() {
            return Err(PipelineError::configuration(format!(
                "delimiter ({:?}) must be a single ASCII character",
                delimiter
            )));
        }

        let mut recordings = Vec::with_capacity(manifest.len());
        let mut corpus_channels: Option<usize> = None;

        for entry in manifest.entries() {
            let samples = read_recording(&entry.path, delimiter as u8)?;
            match corpus_channels {
                None => corpus_channels = Some(samples.ncols()),
                Some(expected) if samples.ncols() != expected => {
                    return Err(PipelineError::corrupt(
                        &entry.path,
                        format!(
                            "has {} channels, the rest of the corpus has {}",
                            samples.ncols(),
                            expected
                        ),
                    ));
                }
                Some(_) => {}
            }

            recordings.push(Recording {
                class: entry.class,
                repetition: entry.repetition,
                samples,
                source: entry.path.clone(),
            });
        }

        info!(
            recordings = recordings.len(),
            channels = corpus_channels.unwrap_or(0),
            "loaded corpus"
        );
        Ok(Self { recordings })
    }

    /// Build a corpus directly from recordings, preserving their order
    pub fn from_recordings(recordings: Vec<Recording>) -> Self {
        Self { recordings }
    }

    /// Recordings in corpus order
    pub fn recordings(&self) -> &[Recording] {
        &self.recordings
    }

    /// Number of recordings
    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    /// Whether the corpus holds no recordings
    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }
}

/// Read one delimited recording file into a samples × channels matrix
fn read_recording(path: &Path, delimiter: u8) -> PipelineResult<Array2<f32>> {
    let file = std::fs::File::open(path).map_err(|err| PipelineError::io(path, err))?;
    // flexible() so ragged rows reach our own column check and get reported
    // with the recording's row and column numbers
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut values = Vec::new();
    let mut channels = 0usize;
    let mut rows = 0usize;

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record
            .map_err(|err| PipelineError::corrupt(path, format!("row {}: {}", row, err)))?;

        if rows == 0 {
            channels = record.len();
            if channels == 0 {
                return Err(PipelineError::corrupt(path, "row 1: no columns"));
            }
        } else if record.len() != channels {
            return Err(PipelineError::corrupt(
                path,
                format!(
                    "row {}: expected {} columns, found {}",
                    row,
                    channels,
                    record.len()
                ),
            ));
        }

        for (column, field) in record.iter().enumerate() {
            let value: f32 = field.parse().map_err(|_| {
                PipelineError::corrupt(
                    path,
                    format!("row {} column {}: {:?} is not a number", row, column + 1, field),
                )
            })?;
            values.push(value);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(PipelineError::corrupt(path, "recording contains no samples"));
    }

    Array2::from_shape_vec((rows, channels), values)
        .map_err(|err| PipelineError::corrupt(path, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_recording_shape_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "R_0_C_0.csv", "1.0,2.0\n-3.5,4.25\n0,0\n");

        let samples = read_recording(&path, b',').unwrap();
        assert_eq!(samples.dim(), (3, 2));
        assert_eq!(samples[[0, 0]], 1.0);
        assert_eq!(samples[[1, 1]], 4.25);
    }

    #[test]
    fn test_ragged_row_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "R_0_C_0.csv", "1,2\n3\n");

        let err = read_recording(&path, b',').unwrap_err();
        match err {
            PipelineError::CorruptRecording { reason, .. } => {
                assert!(reason.contains("row 2"), "reason was {:?}", reason);
            }
            other => panic!("expected CorruptRecording, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_cell_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "R_0_C_0.csv", "1,2\n3,oops\n");

        let err = read_recording(&path, b',').unwrap_err();
        match err {
            PipelineError::CorruptRecording { reason, .. } => {
                assert!(reason.contains("oops"), "reason was {:?}", reason);
            }
            other => panic!("expected CorruptRecording, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "R_0_C_0.csv", "");

        let err = read_recording(&path, b',').unwrap_err();
        assert!(matches!(err, PipelineError::CorruptRecording { .. }));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let manifest = CorpusManifest::from_entries(vec![]);
        let err = Corpus::load(&manifest, 'é').unwrap_err();
        assert!(matches!(err, PipelineError::Configuration { .. }));
    }
}
