/// Bulleted list: every line starts with the same bullet.
pub struct UnorderedList;

impl UnorderedList {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    /// The one bullet that needs no space after it.
    pub const BARE_BULLET: char = '-';

    /// The bullet a line starts with, if it is a list item line.
    ///
    /// `*` and `+` must be followed by a space so `**bold**` lines stay text.
    pub fn bullet(line: &str) -> Option<char> {
        let mut chars = line.chars();
        let bullet = chars.next().filter(|c| Self::BULLETS.contains(c))?;
        (bullet == Self::BARE_BULLET || chars.next() == Some(' ')).then_some(bullet)
    }

    /// True when every line is an item using the first line's bullet.
    ///
    /// Mixing bullets (`-` then `*`) disqualifies the block.
    pub fn matches(block: &str) -> bool {
        let mut lines = block.lines();
        let Some(bullet) = lines.next().and_then(Self::bullet) else {
            return false;
        };
        lines.all(|line| Self::bullet(line) == Some(bullet))
    }

    /// The item text with the bullet removed.
    pub fn item_text(line: &str) -> &str {
        match Self::bullet(line) {
            Some(bullet) => line[bullet.len_utf8()..].trim(),
            None => line.trim(),
        }
    }
}

/// Numbered list: line `i` starts with `"{i+1}. "`.
pub struct OrderedList;

impl OrderedList {
    /// The marker expected on the line at `index` (0-based).
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }

    /// True when numbering starts at 1 and increases by one per line.
    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }

    /// The item text of the line at `index` with its number removed.
    pub fn item_text(line: &str, index: usize) -> &str {
        line.strip_prefix(&Self::marker(index))
            .unwrap_or(line)
            .trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- Item 1\n- Item 2", true)]
    #[case("* Item 1\n* Item 2", true)]
    #[case("+ Only item", true)]
    #[case("- Item 1\n* Item 2", false)]
    #[case("- Item 1\nnot an item", false)]
    #[case("-a\n-b", true)]
    #[case("-no space", true)]
    #[case("*no space", false)]
    #[case("+no space", false)]
    #[case("**bold** start\n**more**", false)]
    fn unordered_detection(#[case] block: &str, #[case] expected: bool) {
        assert_eq!(UnorderedList::matches(block), expected);
    }

    #[rstest]
    #[case("1. First\n2. Second\n3. Third", true)]
    #[case("1. Only", true)]
    #[case("2. Second\n3. Third", false)]
    #[case("1. One\n3. Three", false)]
    #[case("1.No space", false)]
    #[case("1. One\n2. Two\n2. Two again", false)]
    fn ordered_detection(#[case] block: &str, #[case] expected: bool) {
        assert_eq!(OrderedList::matches(block), expected);
    }

    #[test]
    fn ordered_past_nine() {
        let block = (1..=12)
            .map(|n| format!("{n}. item {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(OrderedList::matches(&block));
        assert_eq!(OrderedList::item_text("10. item 10", 9), "item 10");
    }

    #[test]
    fn item_text_strips_markers() {
        assert_eq!(UnorderedList::item_text("- This is a list"), "This is a list");
        assert_eq!(UnorderedList::item_text("*   spaced"), "spaced");
        assert_eq!(UnorderedList::item_text("-tight"), "tight");
        assert_eq!(OrderedList::item_text("2. Second", 1), "Second");
    }
}
