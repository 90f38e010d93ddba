use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a trimmed block.
///
/// Rules are tried in a fixed order and the first match wins:
/// heading, code fence, quote, unordered list, ordered list. Anything else is
/// a paragraph. Quote and list rules need every line to qualify and stop at
/// the first line that does not.
pub fn classify_block(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }
    if CodeFence::matches(block) {
        return BlockKind::CodeFence;
    }
    if BlockQuote::matches(block) {
        return BlockKind::Quote;
    }
    if UnorderedList::matches(block) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::matches(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
