/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. Their lines are joined into one line of inline text.
pub struct Paragraph;

impl Paragraph {
    /// Joins the block's lines with single spaces.
    pub fn join_lines(block: &str) -> String {
        block.lines().map(str::trim).collect::<Vec<_>>().join(" ")
    }
}
