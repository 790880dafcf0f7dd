//! Alphabet map entries.
//!
//! An alphabet assigns a glyph to each consecutive character code starting
//! at [`START_CODE`].  Entries are rendered as a single line that can be
//! pasted into the alphabet map or the effects list.

use std::fmt;

use crate::config::{Config, EntryFormat, SeparatorPolicy};

/// Code assigned to the first glyph (space).
pub const START_CODE: u32 = 32;

/// Last code of the printable ASCII range (tilde).
pub const END_CODE: u32 = 126;

/// Text placed between pairs.
pub const SEPARATOR: &str = ", ";

/// Returns true if the character must be escaped inside a quoted literal.
pub fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\'' | '\\')
}

/// A character escaped for a single-quoted literal.
struct Escaped(char);

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if needs_escape(self.0) {
            write!(f, "\\{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A character code and the glyph that replaces it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    /// The character code.
    pub code: u32,

    /// The replacement glyph.
    pub glyph: char,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:'{}'", self.code, Escaped(self.glyph))
    }
}

impl SeparatorPolicy {
    /// Whether a separator follows the pair with this code.  `more` is true
    /// if another pair follows.
    pub fn separator_after(self, code: u32, more: bool) -> bool {
        match self {
            SeparatorPolicy::BelowEndCode => code < END_CODE,
            SeparatorPolicy::BetweenPairs => more,
        }
    }
}

/// One alphabet, as entered by the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphabetEntry {
    /// Key of the entry in the alphabet map.
    pub id: String,

    /// Name shown to users.
    pub display_name: String,

    /// Replacement glyphs for consecutive codes, starting at [`START_CODE`].
    pub glyphs: String,
}

impl AlphabetEntry {
    /// Create a new entry.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        glyphs: impl Into<String>,
    ) -> AlphabetEntry {
        AlphabetEntry {
            id: id.into(),
            display_name: display_name.into(),
            glyphs: glyphs.into(),
        }
    }

    /// Iterate over the pairs of this alphabet, in code order.
    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.glyphs
            .chars()
            .zip(START_CODE..)
            .map(|(glyph, code)| Pair { code, glyph })
    }

    /// Render the pairs of this alphabet, separated according to `policy`.
    pub fn render_pairs(&self, policy: SeparatorPolicy) -> String {
        let mut out = String::with_capacity(self.glyphs.len() * 10);
        let mut pairs = self.pairs().peekable();
        while let Some(pair) = pairs.next() {
            out.push_str(&pair.to_string());
            if policy.separator_after(pair.code, pairs.peek().is_some()) {
                out.push_str(SEPARATOR);
            }
        }
        out
    }

    /// Render the entry as a single line, without a line terminator.
    pub fn render(&self, config: &Config) -> String {
        let pairs = self.render_pairs(config.separator);
        match config.format {
            EntryFormat::Map => format!(
                "{}: {{rtl: {}, name: '{}', alphabet:{{{}}}}},",
                self.id, config.rtl, self.display_name, pairs
            ),
            EntryFormat::Effect => format!(
                "{{id: '{}', name: '{}', type: 'alphabet', alphabet:{{{}}}}},",
                self.id, self.display_name, pairs
            ),
        }
    }
}
