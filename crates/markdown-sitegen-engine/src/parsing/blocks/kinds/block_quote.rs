/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not in the classifier or the
/// renderer.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True when every line of the block carries the prefix.
    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Removes the prefix and the whitespace around the quoted text.
    pub fn strip_line(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }

    /// The quoted text of every line joined with single spaces.
    pub fn join_lines(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_line)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_quoted() {
        assert!(BlockQuote::matches(
            "> This is line one\n> This is line two\n> Final line."
        ));
    }

    #[test]
    fn one_unquoted_line_disqualifies() {
        assert!(!BlockQuote::matches("> First line\nSecond line is missing prefix"));
        assert!(!BlockQuote::matches("> Line 1\nLine 2 (breaks quote)"));
    }

    #[test]
    fn strip_with_and_without_space() {
        assert_eq!(BlockQuote::strip_line("> hello"), "hello");
        assert_eq!(BlockQuote::strip_line(">hello"), "hello");
        assert_eq!(BlockQuote::strip_line(">"), "");
    }

    #[test]
    fn join_quoted_lines() {
        assert_eq!(
            BlockQuote::join_lines("> line one\n> line two"),
            "line one line two"
        );
    }
}
