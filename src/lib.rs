use std::path::PathBuf;
use serde::Serialize;

pub mod audio;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod matcher;
pub mod pipeline;
pub mod tagger;
pub mod utils;

/// One entry of the descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    pub position: u32,
    pub title: String,
    pub artist: String,
    /// Dance style, only present in the dance descriptor format.
    pub dance: Option<String>,
}

/// Everything a single run knows about the playlist being prepared.
#[derive(Debug, Clone)]
pub struct PlaylistContext {
    pub name: String,
    pub directory: PathBuf,
    pub records: Vec<TrackRecord>,
}

impl PlaylistContext {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>, records: Vec<TrackRecord>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            records,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    pub record: TrackRecord,
    pub source_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum DiTagError {
    #[error("Line {line}: {reason}: '{content}'")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
    #[error("Found {files} mp3 files but {records} descriptor entries")]
    CountMismatch { files: usize, records: usize },
    #[error("Could not tag {}: {reason}", path.display())]
    TagWrite { path: PathBuf, reason: String },
    #[error("{}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl DiTagError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiTagError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiTagError>;

// Re-exports for convenience
pub use config::{DescriptorFormat, RunConfig};
pub use descriptor::parser::DescriptorParser;
pub use matcher::files::{FileMatcher, Matching};
pub use pipeline::{run, RunSummary};
pub use tagger::{ProcessedTrack, SkippedFile, Tagger};
