use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one line of 1-6 `#`, a space, then the heading text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,6}) .+$").expect("Invalid heading regex"))
    }

    /// Returns the heading level if the whole block is a single heading line.
    ///
    /// Seven or more `#` never match.
    pub fn level(block: &str) -> Option<u8> {
        let caps = Self::pattern().captures(block)?;
        u8::try_from(caps[1].len()).ok()
    }

    /// The heading text with the marker and surrounding whitespace removed.
    pub fn text(block: &str, level: u8) -> &str {
        block
            .get(usize::from(level)..)
            .unwrap_or_default()
            .trim()
    }
}
