//! Markdown to HTML conversion.
//!
//! `blocks` cuts a document into classified blocks, `inline` turns block text
//! into spans and `render` maps both onto the `html` node tree.

pub mod blocks;
pub mod inline;
pub mod render;

use crate::{
    error::MarkdownError,
    html::{RenderOptions, ToHtml},
};

pub use render::{block_to_html_node, markdown_to_html_node, span_to_leaf};

const TITLE_MARKER: &str = "# ";

/// Renders a whole document to an HTML string wrapped in a single `<div>`.
pub fn markdown_to_html(markdown: &str, options: &RenderOptions) -> Result<String, MarkdownError> {
    Ok(markdown_to_html_node(markdown)?.to_html_with(options)?)
}

/// Returns the page title: the first line of the first block that starts
/// with a level-one heading marker, marker removed and trimmed.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    blocks::split_blocks(markdown)
        .into_iter()
        .find_map(|block| block.strip_prefix(TITLE_MARKER))
        .and_then(|rest| rest.lines().next())
        .map(|line| line.trim().to_string())
        .ok_or(MarkdownError::MissingTitle)
}
