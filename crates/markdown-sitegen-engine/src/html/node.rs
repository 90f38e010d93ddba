use super::{Attributes, HtmlError, RenderOptions};

/// Serialization shared by every node variant.
pub trait ToHtml {
    /// Appends this node's markup to `out`.
    fn write_html(&self, out: &mut String, options: &RenderOptions) -> Result<(), HtmlError>;

    fn to_html(&self) -> Result<String, HtmlError> {
        self.to_html_with(&RenderOptions::default())
    }

    fn to_html_with(&self, options: &RenderOptions) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.write_html(&mut out, options)?;
        Ok(out)
    }
}

/// A node with no children.
///
/// A leaf without a tag is raw text and is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Untagged text.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

impl ToHtml for LeafNode {
    fn write_html(&self, out: &mut String, options: &RenderOptions) -> Result<(), HtmlError> {
        match (&self.tag, &self.value) {
            (None, None) => Err(HtmlError::MissingRenderableLeaf),
            (None, Some(value)) => {
                out.push_str(value);
                Ok(())
            }
            (Some(tag), value) => {
                out.push('<');
                out.push_str(tag);
                self.attributes.write_html(out, options);
                out.push('>');
                out.push_str(value.as_deref().unwrap_or_default());
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                Ok(())
            }
        }
    }
}

/// A node that owns an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

impl ToHtml for ParentNode {
    fn write_html(&self, out: &mut String, options: &RenderOptions) -> Result<(), HtmlError> {
        let tag = self.tag.as_deref().ok_or(HtmlError::MissingParentTag)?;
        out.push('<');
        out.push_str(tag);
        self.attributes.write_html(out, options);
        out.push('>');
        for child in &self.children {
            child.write_html(out, options)?;
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }
}

/// Either kind of node. Trees are built bottom-up and serialized once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }
}

impl ToHtml for HtmlNode {
    fn write_html(&self, out: &mut String, options: &RenderOptions) -> Result<(), HtmlError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out, options),
            HtmlNode::Parent(parent) => parent.write_html(out, options),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}
