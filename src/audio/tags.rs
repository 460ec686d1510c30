//! ID3v2 tags as written for the dance player.
//!
//! Besides the usual title/artist/track/album frames the player reads the
//! composer (TCOM) as artist, the album artist (TPE2) as playlist name, and
//! genre plus comment as the dance. Stale comments and user text frames
//! are dropped so the player cannot pick them up instead.

use std::path::Path;

use id3::frame::Comment;
use id3::{ErrorKind, Tag, TagLike, Version};

use crate::{DiTagError, Result, TrackRecord};

/// The tag values ditag cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub track: Option<u32>,
    pub dance: Option<String>,
    pub composer: Option<String>,
    pub album_artist: Option<String>,
    /// Text of every COMM frame, in tag order.
    pub comments: Vec<String>,
    /// Number of TXXX frames.
    pub extended_texts: usize,
}

impl TrackTags {
    pub fn for_record(record: &TrackRecord, album: &str) -> Self {
        Self {
            title: Some(record.title.clone()),
            artist: Some(record.artist.clone()),
            album: Some(album.to_string()),
            track: Some(record.position),
            dance: record.dance.clone(),
            composer: Some(record.artist.clone()),
            album_artist: Some(album.to_string()),
            comments: record.dance.iter().cloned().collect(),
            extended_texts: 0,
        }
    }

    /// True if these tags already hold everything in `wanted`.
    ///
    /// A missing dance in `wanted` means "leave the genre alone".
    pub fn covers(&self, wanted: &TrackTags) -> bool {
        self.title == wanted.title
            && self.artist == wanted.artist
            && self.album == wanted.album
            && self.track == wanted.track
            && (wanted.dance.is_none() || self.dance == wanted.dance)
            && self.composer == wanted.composer
            && self.album_artist == wanted.album_artist
            && self.comments == wanted.comments
            && self.extended_texts == wanted.extended_texts
    }
}

/// Reads the tag of `path`. A file without any tag yields empty values.
pub fn read_tags(path: impl AsRef<Path>) -> Result<TrackTags> {
    let path = path.as_ref();
    let Some(tag) = load(path)? else {
        return Ok(TrackTags::default());
    };

    Ok(TrackTags {
        title: tag.title().map(str::to_owned),
        artist: tag.artist().map(str::to_owned),
        album: tag.album().map(str::to_owned),
        track: tag.track(),
        dance: tag.genre().map(str::to_owned),
        composer: text_frame(&tag, "TCOM"),
        album_artist: tag.album_artist().map(str::to_owned),
        comments: tag.comments().map(|c| c.text.clone()).collect(),
        extended_texts: tag.extended_texts().count(),
    })
}

/// Writes the tags for `record` into `path`, keeping unrelated frames.
pub fn write_tags(path: impl AsRef<Path>, record: &TrackRecord, album: &str) -> Result<()> {
    let path = path.as_ref();
    let mut tag = load(path)?.unwrap_or_else(Tag::new);

    let _ = tag.remove("COMM");
    let _ = tag.remove("TXXX");

    tag.set_track(record.position);
    tag.set_title(record.title.as_str());
    tag.set_artist(record.artist.as_str());
    tag.set_text("TCOM", record.artist.as_str());
    tag.set_album(album);
    tag.set_album_artist(album);

    if let Some(dance) = &record.dance {
        tag.set_genre(dance.as_str());
        let _ = tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text: dance.clone(),
        });
    }

    tag.write_to_path(path, Version::Id3v24)
        .map_err(|e| tag_error(path, e))?;

    log::debug!("Wrote ID3v2.4 tag to {}", path.display());
    Ok(())
}

fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    tag.get(id)
        .and_then(|frame| frame.content().text())
        .map(str::to_owned)
}

fn load(path: &Path) -> Result<Option<Tag>> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(Some(tag)),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Ok(None),
        Err(e) => Err(tag_error(path, e)),
    }
}

fn tag_error(path: &Path, e: id3::Error) -> DiTagError {
    DiTagError::TagWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
