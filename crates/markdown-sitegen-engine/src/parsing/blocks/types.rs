/// The structural type of a block.
///
/// Classification is total: anything that matches no other rule is a
/// [`BlockKind::Paragraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A paragraph block (default when no other block rule matches).
    Paragraph,
    /// A single-line `#` heading.
    Heading {
        /// Number of leading `#` characters, 1 through 6.
        level: u8,
    },
    /// A block wrapped in ``` fences.
    CodeFence,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with the same bullet marker.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
}
