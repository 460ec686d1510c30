use std::path::PathBuf;

use crate::audio::probe::probe_mp3;
use crate::audio::tags::{read_tags, write_tags, TrackTags};
use crate::utils::file_ops::FileManager;
use crate::utils::naming::canonical_file_name;
use crate::{DiTagError, MatchedFile, PlaylistContext, Result, TrackRecord};

/// A file that was tagged and renamed (or would be, in a dry run).
#[derive(Debug, Clone)]
pub struct ProcessedTrack {
    pub record: TrackRecord,
    pub source_path: PathBuf,
    pub path: PathBuf,
    pub duration_secs: Option<f64>,
}

impl ProcessedTrack {
    pub fn renamed(&self) -> bool {
        self.source_path != self.path
    }
}

/// A matched file left untouched because of `error`.
#[derive(Debug)]
pub struct SkippedFile {
    pub record: TrackRecord,
    pub path: PathBuf,
    pub error: DiTagError,
}

/// Tags and renames matched files for one playlist.
///
/// Tags are written before the rename, so a file that cannot be tagged keeps
/// its old name. A failed rename after a successful tag write leaves the new
/// tags on the old name.
pub struct Tagger {
    album: String,
    files: FileManager,
    dry_run: bool,
}

impl Tagger {
    pub fn new(context: &PlaylistContext, dry_run: bool) -> Self {
        Self {
            album: context.name.clone(),
            files: FileManager::new(&context.directory),
            dry_run,
        }
    }

    pub fn process(&self, matched: &MatchedFile) -> Result<ProcessedTrack> {
        let record = &matched.record;
        let source = &matched.source_path;
        let file_name = canonical_file_name(record);
        let target = self.files.target_path(&file_name);

        self.files.check_target_free(source, &target)?;
        let info = probe_mp3(source)?;

        if self.dry_run {
            println!("Would tag {} as #{} '{} - {}'", source.display(), record.position, record.artist, record.title);
            if &target != source {
                println!("Would rename {} to {}", source.display(), target.display());
            }
            return Ok(ProcessedTrack {
                record: record.clone(),
                source_path: source.clone(),
                path: target,
                duration_secs: info.duration_secs,
            });
        }

        let wanted = TrackTags::for_record(record, &self.album);
        if read_tags(source)?.covers(&wanted) {
            log::debug!("Tags of {} are already current", source.display());
        } else {
            write_tags(source, record, &self.album)?;
            println!("Tagged {}", source.display());
        }

        let path = self.files.rename_to(source, &file_name)?;
        if &path != source {
            println!("Renamed {} to {}", source.display(), path.display());
        }

        Ok(ProcessedTrack {
            record: record.clone(),
            source_path: source.clone(),
            path,
            duration_secs: info.duration_secs,
        })
    }

    /// Runs [`Tagger::process`] over every match, collecting failures instead of stopping.
    pub fn process_all(&self, matched: &[MatchedFile]) -> (Vec<ProcessedTrack>, Vec<SkippedFile>) {
        let mut processed = Vec::new();
        let mut skipped = Vec::new();

        for file in matched {
            match self.process(file) {
                Ok(track) => processed.push(track),
                Err(error) => {
                    log::warn!("Skipping {}: {}", file.source_path.display(), error);
                    skipped.push(SkippedFile {
                        record: file.record.clone(),
                        path: file.source_path.clone(),
                        error,
                    });
                }
            }
        }

        (processed, skipped)
    }
}
