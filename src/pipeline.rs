use std::io;
use std::path::{Path, PathBuf};

use crate::tagger::{ProcessedTrack, SkippedFile, Tagger};
use crate::utils::file_ops::FileManager;
use crate::utils::playlist::PlaylistWriter;
use crate::utils::reporting::Reporter;
use crate::{
    DescriptorParser, DiTagError, FileMatcher, PlaylistContext, Result, RunConfig, TrackRecord,
};

/// Outcome of a run that got past descriptor parsing.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: Vec<ProcessedTrack>,
    pub skipped: Vec<SkippedFile>,
    pub unmatched_records: Vec<TrackRecord>,
    pub unmatched_files: Vec<PathBuf>,
    /// Set when the directory and the descriptor disagree on the track count.
    pub count_mismatch: Option<DiTagError>,
    pub playlist: Option<(PathBuf, PathBuf)>,
    pub dry_run: bool,
}

/// Parses the descriptor, then tags and renames the matching files.
///
/// Errors returned from here are fatal. Problems with single files end up in
/// [`RunSummary::skipped`] instead. Output folders are prepared before any
/// file is touched; if writing the playlist or report still fails afterwards,
/// the summary is printed before the error is returned.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    require_file(&config.descriptor, "descriptor file not found")?;
    require_dir(&config.directory, "music directory not found")?;

    let parser = DescriptorParser::new(config.format)?;
    let records = parser.parse_file(&config.descriptor)?;
    println!("Read {} tracks from {}", records.len(), config.descriptor.display());

    if !config.dry_run {
        prepare_outputs(config)?;
    }

    let context = PlaylistContext::new(config.name.as_str(), config.directory.as_path(), records);
    let matching = FileMatcher::match_files(&context)?;
    println!("Found {} mp3 files in {}", matching.file_count(), context.directory.display());

    let count_mismatch = matching.count_mismatch();
    if let Some(mismatch) = &count_mismatch {
        log::warn!("{}, processing the first {}", mismatch, matching.matched.len());
    }

    let tagger = Tagger::new(&context, config.dry_run);
    let (processed, skipped) = tagger.process_all(&matching.matched);

    let mut summary = RunSummary {
        processed,
        skipped,
        unmatched_records: matching.unmatched_records,
        unmatched_files: matching.unmatched_files,
        count_mismatch,
        playlist: None,
        dry_run: config.dry_run,
    };

    if config.dry_run {
        return Ok(summary);
    }

    if let Err(e) = write_outputs(config, &mut summary) {
        Reporter::new().print_summary(&summary);
        return Err(e);
    }

    Ok(summary)
}

/// Creates the playlist folder and the report's parent folder up front.
fn prepare_outputs(config: &RunConfig) -> Result<()> {
    if let Some(dir) = &config.playlist_dir {
        FileManager::ensure_directory(dir)?;
    }

    if let Some(parent) = config.report.as_deref().and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            FileManager::ensure_directory(parent)?;
        }
    }

    Ok(())
}

fn write_outputs(config: &RunConfig, summary: &mut RunSummary) -> Result<()> {
    if let Some(dir) = &config.playlist_dir {
        let (m3u, m3u8) = PlaylistWriter::new(dir).write(&config.name, &summary.processed)?;
        println!("Created playlist files {} and {}", m3u.display(), m3u8.display());
        summary.playlist = Some((m3u, m3u8));
    }

    if let Some(report) = &config.report {
        Reporter::new().write_csv_report(summary, report)?;
    }

    Ok(())
}

fn require_file(path: &Path, message: &'static str) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    Err(DiTagError::filesystem(path, io::Error::new(io::ErrorKind::NotFound, message)))
}

fn require_dir(path: &Path, message: &'static str) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    Err(DiTagError::filesystem(path, io::Error::new(io::ErrorKind::NotFound, message)))
}
