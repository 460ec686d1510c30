use std::path::Path;

use symphonia::core::codecs::CODEC_TYPE_MP3;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::{DiTagError, Result};

/// What the container probe learned about an mp3 file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mp3Info {
    pub duration_secs: Option<f64>,
}

/// Checks that `path` holds an MPEG layer III stream before we touch it.
///
/// Anything symphonia cannot open as mp3 is reported as a tag write error,
/// since that is the step it would otherwise break.
pub fn probe_mp3(path: impl AsRef<Path>) -> Result<Mp3Info> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| DiTagError::filesystem(path, e))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("mp3");

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| invalid(path, format!("not a valid mp3 container ({e})")))?;

    let format = probed.format;
    let track = format
        .default_track()
        .ok_or_else(|| invalid(path, "no audio track".to_string()))?;

    let params = &track.codec_params;
    if params.codec != CODEC_TYPE_MP3 {
        return Err(invalid(path, "audio stream is not mp3".to_string()));
    }

    let mut duration_secs = None;
    if let (Some(time_base), Some(n_frames)) = (params.time_base, params.n_frames) {
        let time = time_base.calc_time(n_frames);
        duration_secs = Some(time.seconds as f64 + time.frac);
    }

    Ok(Mp3Info { duration_secs })
}

fn invalid(path: &Path, reason: String) -> DiTagError {
    DiTagError::TagWrite {
        path: path.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_files_that_are_not_mp3() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.mp3");
        std::fs::write(&path, b"dummy audio content").unwrap();

        let err = probe_mp3(&path).unwrap_err();
        assert!(matches!(err, DiTagError::TagWrite { .. }), "{err:?}");
    }

    #[test]
    fn missing_file_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = probe_mp3(dir.path().join("gone.mp3")).unwrap_err();
        assert!(matches!(err, DiTagError::Filesystem { .. }), "{err:?}");
    }
}
