use crate::error::MarkdownError;

use super::{
    delimiter::split_delimiter,
    extract::{split_images, split_links},
    kinds::{Bold, CodeSpan, Italic},
    types::{Span, SpanKind},
};

/// Parses inline Markdown into an ordered sequence of [`Span`]s.
///
/// # Pipeline
/// Each stage only splits the spans that are still plain text:
/// 1. images `![alt](url)`
/// 2. links `[text](url)` (after images, so `![` is never read as a link)
/// 3. bold `**`
/// 4. italic `_`
/// 5. code `` ` ``
///
/// # Errors
/// [`MarkdownError::MalformedDelimiter`] when a delimiter is left unclosed.
pub fn parse_inline(text: &str) -> Result<Vec<Span>, MarkdownError> {
    let spans = vec![Span::text(text)];
    let spans = split_images(spans)?;
    let spans = split_links(spans)?;
    let spans = split_delimiter(spans, Bold::DELIMITER, SpanKind::Bold)?;
    let spans = split_delimiter(spans, Italic::DELIMITER, SpanKind::Italic)?;
    split_delimiter(spans, CodeSpan::DELIMITER, SpanKind::Code)
}
