use crate::{
    error::MarkdownError,
    html::{HtmlNode, LeafNode, ParentNode},
};

use super::{
    blocks::{
        BlockKind, classify_block,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        split_blocks,
    },
    inline::{Span, SpanKind, parse_inline},
};

/// Converts one span into the leaf that renders it.
pub fn span_to_leaf(span: Span) -> LeafNode {
    match span.kind {
        SpanKind::Text => LeafNode::raw(span.content),
        SpanKind::Bold => LeafNode::new("b", span.content),
        SpanKind::Italic => LeafNode::new("i", span.content),
        SpanKind::Code => LeafNode::new("code", span.content),
        SpanKind::Link => {
            LeafNode::new("a", span.content).with_attribute("href", span.target.unwrap_or_default())
        }
        SpanKind::Image => LeafNode::new("img", "")
            .with_attribute("src", span.target.unwrap_or_default())
            .with_attribute("alt", span.content),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(parse_inline(text)?
        .into_iter()
        .map(|span| span_to_leaf(span).into())
        .collect())
}

/// Renders one classified block.
///
/// Every kind becomes a parent node; a code fence becomes `<pre>` holding a
/// single literal `<code>` leaf.
pub fn block_to_html_node(block: &str, kind: BlockKind) -> Result<HtmlNode, MarkdownError> {
    let node = match kind {
        BlockKind::Paragraph => {
            ParentNode::new("p", text_to_children(&Paragraph::join_lines(block))?)
        }
        BlockKind::Heading { level } => ParentNode::new(
            format!("h{level}"),
            text_to_children(Heading::text(block, level))?,
        ),
        BlockKind::Quote => {
            ParentNode::new("blockquote", text_to_children(&BlockQuote::join_lines(block))?)
        }
        BlockKind::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(UnorderedList::item_text(line)))
                .collect::<Result<Vec<_>, _>>()?;
            ParentNode::new("ul", items)
        }
        BlockKind::OrderedList => {
            let items = block
                .lines()
                .enumerate()
                .map(|(i, line)| list_item(OrderedList::item_text(line, i)))
                .collect::<Result<Vec<_>, _>>()?;
            ParentNode::new("ol", items)
        }
        BlockKind::CodeFence => {
            let parts = CodeFence::parts(block);
            let mut code = span_to_leaf(Span::code(parts.code));
            if let Some(language) = parts.language {
                code = code.with_attribute("class", format!("language-{language}"));
            }
            ParentNode::new("pre", vec![code.into()])
        }
    };
    Ok(node.into())
}

fn list_item(text: &str) -> Result<HtmlNode, MarkdownError> {
    Ok(ParentNode::new("li", text_to_children(text)?).into())
}

/// Converts a whole document into a single `<div>` holding one subtree per
/// block, in document order.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let children = split_blocks(markdown)
        .into_iter()
        .map(|block| block_to_html_node(block, classify_block(block)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("div", children).into())
}
