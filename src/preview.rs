//! Preview of an alphabet applied to sample text.
//!
//! Text enclosed in backticks or pipes is converted on its own, and the
//! delimiters are dropped.  If the text has no such segment, all of it is
//! converted.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::fragment::{AlphabetEntry, START_CODE};

lazy_static! {
    /// Regex for detecting delimited segments.
    pub(crate) static ref SEGMENT: Regex = Regex::new("[|`]([^`|]*)[`|]").unwrap();
}

/// Replace each character that has a glyph in `glyphs` with that glyph.
fn convert(text: &str, glyphs: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let glyph = (c as u32)
            .checked_sub(START_CODE)
            .and_then(|index| glyphs.get(index as usize));
        out.push(*glyph.unwrap_or(&c));
    }
    out
}

/// Apply the alphabet of `entry` to `text`.
pub fn preview(text: &str, entry: &AlphabetEntry) -> String {
    let glyphs: Vec<char> = entry.glyphs.chars().collect();
    if SEGMENT.is_match(text) {
        SEGMENT
            .replace_all(text, |caps: &Captures| convert(&caps[1], &glyphs))
            .into_owned()
    } else {
        convert(text, &glyphs)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fullwidth() -> AlphabetEntry {
        let glyphs: String = (' '..='~')
            .map(|c| match c {
                ' ' => '\u{3000}',
                '!'..='~' => std::char::from_u32(c as u32 + 0xFEE0).unwrap(),
                _ => c,
            })
            .collect();
        AlphabetEntry::new("fullwidth", "Full Width", glyphs)
    }

    #[test]
    fn test_whole_text() {
        assert_eq!(preview("Hi!", &fullwidth()), "Ｈｉ！");
    }

    #[test]
    fn test_segments() {
        assert_eq!(
            preview("say `hi` and |bye|!", &fullwidth()),
            "say ｈｉ and ｂｙｅ!"
        );
        assert_eq!(preview("mixed `delims| here", &fullwidth()), "mixed ｄｅｌｉｍｓ here");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        let entry = AlphabetEntry::new("short", "Short", "_!");
        assert_eq!(preview("a !\té", &entry), "a_!\té");
        assert_eq!(preview("anything", &AlphabetEntry::new("e", "E", "")), "anything");
    }
}
