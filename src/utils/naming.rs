use crate::TrackRecord;

const INVALID: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Makes `value` usable as part of a filename on every common filesystem.
pub fn sanitize_component(value: &str) -> String {
    let replaced: String = value
        .chars()
        .map(|c| if INVALID.contains(&c) || c.is_control() { '_' } else { c })
        .collect();

    replaced.trim().trim_end_matches('.').trim_end().to_string()
}

/// `NN_Title; Artist[ -- Dance].mp3`, the naming the dance player expects.
pub fn canonical_file_name(record: &TrackRecord) -> String {
    let mut name = format!(
        "{:02}_{}; {}",
        record.position,
        sanitize_component(&record.title),
        sanitize_component(&record.artist)
    );

    if let Some(dance) = &record.dance {
        name.push_str(" -- ");
        name.push_str(&sanitize_component(dance));
    }

    name.push_str(".mp3");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(position: u32, title: &str, artist: &str, dance: Option<&str>) -> TrackRecord {
        TrackRecord {
            position,
            title: title.to_string(),
            artist: artist.to_string(),
            dance: dance.map(str::to_string),
        }
    }

    #[test]
    fn canonical_name_embeds_position_title_and_artist() {
        assert_eq!(
            canonical_file_name(&record(1, "Song A", "Alice", None)),
            "01_Song A; Alice.mp3"
        );
        assert_eq!(
            canonical_file_name(&record(12, "Waltz", "Artist", Some("Slow Waltz"))),
            "12_Waltz; Artist -- Slow Waltz.mp3"
        );
        assert_eq!(
            canonical_file_name(&record(123, "T", "A", None)),
            "123_T; A.mp3"
        );
    }

    #[test]
    fn invalid_characters_are_replaced() {
        assert_eq!(sanitize_component("AC/DC"), "AC_DC");
        assert_eq!(sanitize_component("What? <Live>"), "What_ _Live_");
        assert_eq!(sanitize_component("a\tb"), "a_b");
        assert_eq!(sanitize_component("  Mr. Jones...  "), "Mr. Jones");
    }

    #[test]
    fn sanitized_name_is_stable() {
        let once = sanitize_component("Who: \"Me\"?");
        assert_eq!(sanitize_component(&once), once);
    }
}
