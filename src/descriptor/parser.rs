use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::config::DescriptorFormat;
use crate::{DiTagError, Result, TrackRecord};

const SIMPLE_PATTERN: &str =
    r"^(?:(?P<number>\d+)\s*[._)]\s*)?(?P<artist>.+?)\s+-\s+(?P<title>.+)$";
const DANCE_PATTERN: &str =
    r"^(?:(?P<number>\d+)_)?(?P<title>[^;]+);\s*(?P<artist>.+?)\s+--\s+(?P<dance>.+)$";

/// Turns a descriptor file into track records.
///
/// Blank lines and lines starting with `#` are ignored. Every other line is
/// one track; its position is its index among those lines, starting at 1.
/// A line may repeat its position as a leading number, which then has to agree.
pub struct DescriptorParser {
    format: DescriptorFormat,
    pattern: Regex,
}

impl DescriptorParser {
    pub fn new(format: DescriptorFormat) -> Result<Self> {
        let pattern = match format {
            DescriptorFormat::Simple => SIMPLE_PATTERN,
            DescriptorFormat::Dance => DANCE_PATTERN,
        };

        Ok(Self {
            format,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<TrackRecord>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DiTagError::filesystem(path, e))?;
        let records = self.parse_str(&content)?;
        log::debug!("Parsed {} records from {}", records.len(), path.display());
        Ok(records)
    }

    pub fn parse_str(&self, content: &str) -> Result<Vec<TrackRecord>> {
        // Editors on Windows like to prepend a BOM.
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut records = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let position = records.len() as u32 + 1;
            records.push(self.parse_line(line, index + 1, position)?);
        }

        Ok(records)
    }

    fn parse_line(&self, line: &str, line_no: usize, position: u32) -> Result<TrackRecord> {
        let Some(caps) = self.pattern.captures(line) else {
            return Err(parse_error(line_no, line, self.diagnose(line)));
        };

        if let Some(number) = caps.name("number") {
            let found = number.as_str();
            if found.parse::<u32>().ok() != Some(position) {
                return Err(parse_error(
                    line_no,
                    line,
                    format!("Track number mismatch: expected '{:02}' but found '{}'", position, found),
                ));
            }
        }

        let title = field(&caps, "title");
        let artist = field(&caps, "artist");
        if title.is_empty() {
            return Err(parse_error(line_no, line, "Empty title".to_string()));
        }
        if artist.is_empty() {
            return Err(parse_error(line_no, line, "Empty artist".to_string()));
        }

        let dance = Some(field(&caps, "dance")).filter(|d| !d.is_empty());

        Ok(TrackRecord {
            position,
            title,
            artist,
            dance,
        })
    }

    /// Best guess at what is wrong with a line the grammar rejected.
    fn diagnose(&self, line: &str) -> String {
        match self.format {
            DescriptorFormat::Simple => "Missing ' - ' between artist and title".to_string(),
            DescriptorFormat::Dance => {
                if !line.contains(';') {
                    if line.contains(',') {
                        "Found comma (,) but expected semicolon (;)".to_string()
                    } else {
                        "Missing semicolon (;) between title and artist".to_string()
                    }
                } else if !line.contains("--") {
                    if line.contains('-') {
                        "Found single dash (-) but expected double dash (--)".to_string()
                    } else {
                        "Missing double dash (--) before the dance".to_string()
                    }
                } else {
                    "Expected 'NN_Title; Artist -- Dance'".to_string()
                }
            }
        }
    }
}

fn field(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn parse_error(line: usize, content: &str, reason: String) -> DiTagError {
    DiTagError::Parse {
        line,
        content: content.to_string(),
        reason,
    }
}
