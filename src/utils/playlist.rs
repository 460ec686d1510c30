use std::fs;
use std::path::{Path, PathBuf};

use crate::tagger::ProcessedTrack;
use crate::utils::naming::sanitize_component;
use crate::{DiTagError, Result};

/// Writes extended M3U playlists next to each other as `.m3u` and `.m3u8`.
pub struct PlaylistWriter {
    output_dir: PathBuf,
}

impl PlaylistWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the paths of the `.m3u` and `.m3u8` files.
    pub fn write(&self, name: &str, tracks: &[ProcessedTrack]) -> Result<(PathBuf, PathBuf)> {
        let mut stem = sanitize_component(name);
        if stem.is_empty() {
            stem = "playlist".to_string();
        }

        let m3u = self.output_dir.join(format!("{stem}.m3u"));
        let m3u8 = self.output_dir.join(format!("{stem}.m3u8"));

        fs::write(&m3u, render(tracks)).map_err(|e| DiTagError::filesystem(&m3u, e))?;
        fs::copy(&m3u, &m3u8).map_err(|e| DiTagError::filesystem(&m3u8, e))?;

        log::debug!("Wrote {} playlist entries to {}", tracks.len(), m3u.display());
        Ok((m3u, m3u8))
    }
}

pub fn render(tracks: &[ProcessedTrack]) -> String {
    let mut tracks: Vec<&ProcessedTrack> = tracks.iter().collect();
    tracks.sort_by_key(|t| t.record.position);

    let mut lines = vec!["#EXTM3U".to_string()];
    for track in tracks {
        // -1 is the M3U convention for an unknown length.
        let seconds = track.duration_secs.map_or(-1, |d| d.trunc() as i64);
        lines.push(format!("#EXTINF:{},{} - {}", seconds, track.record.artist, track.record.title));
        lines.push(encode_path(&track.path));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Percent-encodes everything except unreserved characters and `/`.
pub fn encode_path(path: &Path) -> String {
    let mut out = String::new();
    for byte in path.to_string_lossy().bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
