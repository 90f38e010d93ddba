use crate::html::HtmlError;
use crate::parsing::inline::kinds::ReferenceKind;

/// Errors raised while converting a Markdown document to HTML.
///
/// Every variant is fatal for the document being converted: no partial
/// HTML is produced once one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("Unterminated `{delimiter}` delimiter in: {text}")]
    MalformedDelimiter {
        delimiter: &'static str,
        text: String,
    },
    #[error("Malformed {kind} syntax in: {text}")]
    MalformedImageOrLink { kind: ReferenceKind, text: String },
    #[error("Document has no `# ` title heading")]
    MissingTitle,
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),
}
