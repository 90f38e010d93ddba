//! # HTML Node Model
//!
//! A minimal owned tree of HTML nodes and its serialization.
//!
//! - **`LeafNode`**: optional tag, text, attributes. No tag means raw text.
//! - **`ParentNode`**: tag, ordered children, attributes. No children is legal.
//! - **`HtmlNode`**: either of the above; what the renderer produces.
//!
//! Text content is written verbatim. Attribute values are verbatim unless
//! [`RenderOptions::escape_attributes`] is set.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode, ToHtml};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("Leaf node has neither a tag nor a value")]
    MissingRenderableLeaf,
    #[error("Parent node has no tag")]
    MissingParentTag,
}

/// Serialization switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `"`, `&`, `<` and `>` in attribute values.
    pub escape_attributes: bool,
}
