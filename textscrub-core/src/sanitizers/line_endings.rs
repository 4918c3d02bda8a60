//! line_endings.rs - Literal lookup for line breaks, tabs and unknown-object characters.
//!
//! The keys are fixed byte literals scanned with a leftmost-longest Aho-Corasick
//! automaton, so `\r\n` is always consumed as one unit before a lone `\r` can match.
//!
//! License: MIT OR APACHE 2.0

use daachorse::{DoubleArrayAhoCorasick, DoubleArrayAhoCorasickBuilder, MatchKind};
use std::fmt;

use crate::errors::SanitizeError;

/// What a lookup key stands for. The replacement text is resolved from the
/// caller's options at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakClass {
    /// A line break: LF, CR, CRLF, NEL, U+2028.
    Linefeed,
    /// A paragraph or page break: VT, FF, U+2029.
    Formfeed,
    /// Horizontal tab.
    Tab,
    /// U+FFFC object replacement and U+FFFD replacement character.
    Unknown,
}

/// The literal keys of the lookup and their classes.
pub const LINE_ENDING_KEYS: &[(&[u8], BreakClass)] = &[
    (b"\xE2\x80\xA8", BreakClass::Linefeed), // U+2028
    (b"\xE2\x80\xA9", BreakClass::Formfeed), // U+2029
    (b"\xC2\x85", BreakClass::Linefeed),     // NEL
    (b"\t", BreakClass::Tab),
    (b"\x0B", BreakClass::Formfeed),
    (b"\x0C", BreakClass::Formfeed),
    (b"\r\n", BreakClass::Linefeed),
    (b"\r", BreakClass::Linefeed),
    (b"\n", BreakClass::Linefeed),
    (b"\xEF\xBF\xBC", BreakClass::Unknown), // U+FFFC
    (b"\xEF\xBF\xBD", BreakClass::Unknown), // U+FFFD
];

/// Compiled form of [`LINE_ENDING_KEYS`].
pub struct LineEndingLookup {
    automaton: DoubleArrayAhoCorasick<u32>,
}

impl fmt::Debug for LineEndingLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEndingLookup")
            .field("automaton", &"<DoubleArrayAhoCorasick>")
            .field("keys", &LINE_ENDING_KEYS.len())
            .finish()
    }
}

impl LineEndingLookup {
    /// Builds the automaton over every key. Values index into [`LINE_ENDING_KEYS`].
    pub fn new() -> Result<Self, SanitizeError> {
        let patvals = LINE_ENDING_KEYS
            .iter()
            .enumerate()
            .map(|(i, (key, _))| (*key, i as u32));

        let automaton = DoubleArrayAhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build_with_values(patvals)
            .map_err(|e| SanitizeError::LookupCompilation(e.to_string()))?;

        Ok(Self { automaton })
    }

    /// Rewrites every key occurrence in `haystack` with the text `resolve` returns
    /// for its class. Returns the rewritten bytes and the number of keys replaced.
    pub fn replace_all<'a, F>(&self, haystack: &[u8], resolve: F) -> (Vec<u8>, usize)
    where
        F: Fn(BreakClass) -> &'a str,
    {
        let mut out = Vec::with_capacity(haystack.len());
        let mut last_end = 0usize;
        let mut count = 0usize;

        for m in self.automaton.leftmost_find_iter(haystack) {
            let class = LINE_ENDING_KEYS[m.value() as usize].1;
            out.extend_from_slice(&haystack[last_end..m.start()]);
            out.extend_from_slice(resolve(class).as_bytes());
            last_end = m.end();
            count += 1;
        }
        out.extend_from_slice(&haystack[last_end..]);
        (out, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(class: BreakClass) -> &'static str {
        match class {
            BreakClass::Linefeed => "<LF>",
            BreakClass::Formfeed => "<FF>",
            BreakClass::Tab => "<TAB>",
            BreakClass::Unknown => "<?>",
        }
    }

    #[test]
    fn test_crlf_is_a_single_unit() {
        let lookup = LineEndingLookup::new().unwrap();
        let (out, count) = lookup.replace_all(b"a\r\nb\rc\nd", label);
        assert_eq!(out, b"a<LF>b<LF>c<LF>d");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_lf_cr_is_two_breaks() {
        let lookup = LineEndingLookup::new().unwrap();
        let (out, count) = lookup.replace_all(b"a\n\rb", label);
        assert_eq!(out, b"a<LF><LF>b");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_every_key_is_classified() {
        let lookup = LineEndingLookup::new().unwrap();
        let input = "\u{2028}\u{2029}\u{85}\t\x0B\x0C\u{FFFC}\u{FFFD}";
        let (out, count) = lookup.replace_all(input.as_bytes(), label);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<LF><FF><LF><TAB><FF><FF><?><?>"
        );
        assert_eq!(count, 8);
    }

    #[test]
    fn test_neighbouring_codepoints_are_untouched() {
        let lookup = LineEndingLookup::new().unwrap();
        // U+2027, U+202A and U+FFFB share lead bytes with keys.
        let input = "\u{2027}\u{202A}\u{FFFB} plain";
        let (out, count) = lookup.replace_all(input.as_bytes(), label);
        assert_eq!(out, input.as_bytes());
        assert_eq!(count, 0);
    }
}
