//! Filename ordering used to pair files with descriptor positions.
//!
//! Names are compared run by run: digit runs by numeric value, everything
//! else case-insensitively. `track2.mp3` sorts before `track10.mp3` and
//! `B.mp3` between `a.mp3` and `c.mp3`. Names that still compare equal
//! (`A.mp3` and `a.mp3`, `1.mp3` and `01.mp3`) are ordered by their raw
//! bytes, so the result never depends on the platform.

use std::cmp::Ordering;

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key_cmp(a, b).then_with(|| a.cmp(b))
}

fn natural_key_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Runs::new(a);
    let mut right = Runs::new(b);

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Run::Digits(x)), Some(Run::Digits(y))) => cmp_digits(x, y),
            (Some(Run::Text(x)), Some(Run::Text(y))) => cmp_text(x, y),
            // Numbers sort before words.
            (Some(Run::Digits(_)), Some(Run::Text(_))) => Ordering::Less,
            (Some(Run::Text(_)), Some(Run::Digits(_))) => Ordering::Greater,
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn cmp_digits(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

fn cmp_text(x: &str, y: &str) -> Ordering {
    x.chars()
        .flat_map(char::to_lowercase)
        .cmp(y.chars().flat_map(char::to_lowercase))
}

enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(i, _)| i);

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits { Run::Digits(run) } else { Run::Text(run) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(
            sorted(&["track10.mp3", "track2.mp3", "track1.mp3"]),
            vec!["track1.mp3", "track2.mp3", "track10.mp3"]
        );
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(
            sorted(&["c.mp3", "B.mp3", "a.mp3"]),
            vec!["a.mp3", "B.mp3", "c.mp3"]
        );
    }

    #[test]
    fn padded_canonical_names_keep_their_order_past_99() {
        assert_eq!(
            sorted(&["100_Z; Z.mp3", "99_A; A.mp3", "09_B; B.mp3"]),
            vec!["09_B; B.mp3", "99_A; A.mp3", "100_Z; Z.mp3"]
        );
    }

    #[test]
    fn ties_fall_back_to_bytes() {
        assert_eq!(natural_cmp("A.mp3", "a.mp3"), Ordering::Less);
        assert_eq!(natural_cmp("01.mp3", "1.mp3"), Ordering::Less);
        assert_eq!(natural_cmp("a.mp3", "a.mp3"), Ordering::Equal);
    }
}
