use crate::error::MarkdownError;

use super::types::{Span, SpanKind};

/// Splits every text span on `delimiter`, giving the enclosed parts `kind`.
///
/// Splitting must produce an odd number of parts; an even count means a
/// delimiter was opened and never closed, which is a
/// [`MarkdownError::MalformedDelimiter`]. Empty parts are dropped, and spans
/// that are not plain text pass through untouched.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, MarkdownError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::MalformedDelimiter {
                delimiter,
                text: span.content.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Text } else { kind };
            out.push(Span::new(part_kind, part));
        }
    }

    Ok(out)
}
