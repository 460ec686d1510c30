use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

use crate::pipeline::RunSummary;
use crate::{DiTagError, Result};

const HEADER: [&str; 8] = [
    "position", "artist", "title", "dance", "source", "target", "status", "detail",
];

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Tagged,
    Planned,
    Skipped,
    UnmatchedRecord,
    UnmatchedFile,
}

/// One line of the CSV report.
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub position: Option<u32>,
    pub artist: String,
    pub title: String,
    pub dance: String,
    pub source: String,
    pub target: String,
    pub status: Status,
    pub detail: String,
}

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        let verb = if summary.dry_run { "Would tag" } else { "Tagged" };
        println!("\n=== Summary ===");
        println!("{}: {}", verb, summary.processed.len());
        println!("Skipped: {}", summary.skipped.len());

        for skipped in &summary.skipped {
            println!("  Skipped {}: {}", skipped.path.display(), skipped.error);
        }

        if let Some(mismatch) = &summary.count_mismatch {
            println!("Warning: {}", mismatch);
        }
        for record in &summary.unmatched_records {
            println!("  No file for #{}: {} - {}", record.position, record.artist, record.title);
        }
        for path in &summary.unmatched_files {
            println!("  No descriptor entry for {}", path.display());
        }
    }

    pub fn rows(&self, summary: &RunSummary) -> Vec<ReportRow> {
        let mut rows = Vec::new();

        for track in &summary.processed {
            rows.push(ReportRow {
                position: Some(track.record.position),
                artist: track.record.artist.clone(),
                title: track.record.title.clone(),
                dance: track.record.dance.clone().unwrap_or_default(),
                source: track.source_path.display().to_string(),
                target: track.path.display().to_string(),
                status: if summary.dry_run { Status::Planned } else { Status::Tagged },
                detail: String::new(),
            });
        }

        for skipped in &summary.skipped {
            rows.push(ReportRow {
                position: Some(skipped.record.position),
                artist: skipped.record.artist.clone(),
                title: skipped.record.title.clone(),
                dance: skipped.record.dance.clone().unwrap_or_default(),
                source: skipped.path.display().to_string(),
                target: String::new(),
                status: Status::Skipped,
                detail: skipped.error.to_string(),
            });
        }

        for record in &summary.unmatched_records {
            rows.push(ReportRow {
                position: Some(record.position),
                artist: record.artist.clone(),
                title: record.title.clone(),
                dance: record.dance.clone().unwrap_or_default(),
                source: String::new(),
                target: String::new(),
                status: Status::UnmatchedRecord,
                detail: "no mp3 file left to match".to_string(),
            });
        }

        for path in &summary.unmatched_files {
            rows.push(ReportRow {
                position: None,
                artist: String::new(),
                title: String::new(),
                dance: String::new(),
                source: path.display().to_string(),
                target: String::new(),
                status: Status::UnmatchedFile,
                detail: "no descriptor entry left to match".to_string(),
            });
        }

        rows.sort_by_key(|row| row.position.unwrap_or(u32::MAX));
        rows
    }

    pub fn write_csv_report(&self, summary: &RunSummary, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path = output_path.as_ref();
        let file = std::fs::File::create(output_path)
            .map_err(|e| DiTagError::filesystem(output_path, e))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        writer.write_record(HEADER)?;
        for row in self.rows(summary) {
            writer.serialize(row)?;
        }

        writer.flush()?;
        println!("Report saved to: {}", output_path.display());
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
