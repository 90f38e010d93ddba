/// The type of an inline [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed fragment of inline text.
///
/// `target` carries the URL of a link or image and is `None` for every other
/// kind. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub content: String,
    pub target: Option<String>,
}

impl Span {
    pub fn new(kind: SpanKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            target: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(SpanKind::Text, content)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(SpanKind::Bold, content)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(SpanKind::Italic, content)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(SpanKind::Code, content)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            content: content.into(),
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            content: alt.into(),
            target: Some(url.into()),
        }
    }

    /// Only plain text spans are split further by the inline pipeline.
    pub fn is_text(&self) -> bool {
        self.kind == SpanKind::Text
    }
}
