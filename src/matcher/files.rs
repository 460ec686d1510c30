use std::path::{Path, PathBuf};

use crate::matcher::order::natural_cmp;
use crate::{DiTagError, MatchedFile, PlaylistContext, Result, TrackRecord};

/// Pairing of descriptor records with the mp3 files of a directory.
#[derive(Debug, Default)]
pub struct Matching {
    pub matched: Vec<MatchedFile>,
    pub unmatched_records: Vec<TrackRecord>,
    pub unmatched_files: Vec<PathBuf>,
}

impl Matching {
    pub fn file_count(&self) -> usize {
        self.matched.len() + self.unmatched_files.len()
    }

    pub fn record_count(&self) -> usize {
        self.matched.len() + self.unmatched_records.len()
    }

    /// The disagreement between file and record counts, if any.
    ///
    /// Only the common prefix was matched; this is meant to be reported, not
    /// to stop the run.
    pub fn count_mismatch(&self) -> Option<DiTagError> {
        let (files, records) = (self.file_count(), self.record_count());
        (files != records).then_some(DiTagError::CountMismatch { files, records })
    }
}

pub struct FileMatcher;

impl FileMatcher {
    /// Lists the mp3 files directly inside `dir`, in pairing order.
    pub fn list_mp3_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut files = Vec::new();

        for entry in walkdir::WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                DiTagError::filesystem(path, e.into())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if is_mp3(entry.path()) {
                files.push(entry.into_path());
            } else {
                log::debug!("Skipping non-mp3 file: {}", entry.path().display());
            }
        }

        files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
        Ok(files)
    }

    /// Pairs the Nth file in sorted order with the record at position N.
    pub fn match_files(context: &PlaylistContext) -> Result<Matching> {
        let files = Self::list_mp3_files(&context.directory)?;
        log::debug!(
            "Matching {} files against {} records in {}",
            files.len(),
            context.records.len(),
            context.directory.display()
        );
        Ok(Self::pair(files, &context.records))
    }

    pub fn pair(files: Vec<PathBuf>, records: &[TrackRecord]) -> Matching {
        let mut records_sorted: Vec<&TrackRecord> = records.iter().collect();
        records_sorted.sort_by_key(|r| r.position);

        let common = files.len().min(records_sorted.len());
        let mut files = files.into_iter();

        let matched = records_sorted[..common]
            .iter()
            .zip(files.by_ref())
            .map(|(record, source_path)| MatchedFile {
                record: (*record).clone(),
                source_path,
            })
            .collect();

        Matching {
            matched,
            unmatched_records: records_sorted[common..].iter().map(|r| (*r).clone()).collect(),
            unmatched_files: files.collect(),
        }
    }
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
