//! tables.rs - The fixed byte-range tables behind the scrubbing stages.
//!
//! Every pattern here is written against raw UTF-8 bytes and is compiled with
//! Unicode mode disabled, so `\xC2` means the byte 0xC2 and not U+00C2.
//!
//! License: MIT OR APACHE 2.0

/// One contiguous codepoint range and the byte pattern matching its UTF-8 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// Short identifier used in logs and probe reports.
    pub name: &'static str,
    /// First codepoint of the range (inclusive).
    pub first: u32,
    /// Last codepoint of the range (inclusive).
    pub last: u32,
    /// Byte-level pattern matching exactly the encodings of `first..=last`.
    pub pattern: &'static str,
}

/// Ranges removed unconditionally. The ranges are pairwise disjoint, so the
/// order of alternatives in the compiled set does not change what is matched.
///
/// U+0009..U+000D and U+0085 are deliberately absent; the line-ending stage owns them.
pub const EVIL_RANGES: &[ByteRange] = &[
    ByteRange { name: "c0_low", first: 0x0000, last: 0x0008, pattern: r"[\x00-\x08]" },
    ByteRange { name: "c0_high", first: 0x000E, last: 0x001F, pattern: r"[\x0E-\x1F]" },
    ByteRange { name: "delete", first: 0x007F, last: 0x007F, pattern: r"\x7F" },
    ByteRange { name: "c1_low", first: 0x0080, last: 0x0084, pattern: r"\xC2[\x80-\x84]" },
    ByteRange { name: "c1_high", first: 0x0086, last: 0x009F, pattern: r"\xC2[\x86-\x9F]" },
    ByteRange { name: "byte_order_mark", first: 0xFEFF, last: 0xFEFF, pattern: r"\xEF\xBB\xBF" },
    ByteRange { name: "deprecated_format", first: 0x206A, last: 0x206F, pattern: r"\xE2\x81[\xAA-\xAF]" },
    ByteRange { name: "interlinear_annotation", first: 0xFFF9, last: 0xFFFA, pattern: r"\xEF\xBF[\xB9-\xBA]" },
    ByteRange { name: "tags", first: 0xE0000, last: 0xE007F, pattern: r"\xF3\xA0[\x80-\x81][\x80-\xBF]" },
    ByteRange { name: "surrogates", first: 0xD800, last: 0xDFFF, pattern: r"\xED[\xA0-\xBF][\x80-\xBF]" },
    ByteRange { name: "beyond_unicode", first: 0x11_0000, last: 0x13_FFFF, pattern: r"\xF4[\x90-\xBF][\x80-\xBF][\x80-\xBF]" },
];

/// Noncharacters: U+FFFE/U+FFFF at the end of every plane and U+FDD0..U+FDEF.
/// Applied when reserved stripping is off.
pub const INVALID_SEQUENCE_PATTERN: &str =
    r"(\xF4\x8F|\xEF|\xF0\x9F|\xF0\xAF|\xF0\xBF|[\xF1-\xF3][\x8F\x9F\xAF\xBF])\xBF[\xBE\xBF]|\xEF\xB7[\x90-\xAF]";

/// Unicode control, private-use and unassigned codepoints, minus the controls the
/// line-ending stage rewrites (TAB, LF, VT, FF, CR, NEL). Compiled in Unicode mode.
pub const RESERVED_PATTERN: &str = r"[[\p{Cc}\p{Co}\p{Cn}]--[\t\n\x0B\x0C\r\x{85}]]";

/// Joins the evil table into a single alternation for one-pass matching.
pub fn evil_alternation() -> String {
    EVIL_RANGES
        .iter()
        .map(|range| range.pattern)
        .collect::<Vec<_>>()
        .join("|")
}
