use crate::error::MarkdownError;

use super::{
    cursor::{Cursor, GroupIndex},
    kinds::{Image, Reference, ReferenceKind},
    types::Span,
};

/// A reference found in a piece of text, with the text around it.
///
/// `before`, `full` and `rest` are consecutive slices of the scanned text;
/// `before` starts where the previous match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<'a> {
    pub before: &'a str,
    pub full: &'a str,
    pub label: &'a str,
    pub target: &'a str,
    pub rest: &'a str,
}

/// Scans text left to right for `kind` references, yielding each in order.
///
/// Labels and targets are bracket-balanced, so `[a [b] c](url)` and
/// `(https://host/x_(y))` are each read as one group. Group ends are indexed
/// up front, so every byte is visited a constant number of times.
pub struct ReferenceScanner<'a> {
    text: &'a str,
    kind: ReferenceKind,
    cur: Cursor<'a>,
    labels: GroupIndex,
    targets: GroupIndex,
    last_end: usize,
}

impl<'a> ReferenceScanner<'a> {
    pub fn new(text: &'a str, kind: ReferenceKind) -> Self {
        Self {
            text,
            kind,
            cur: Cursor::new(text),
            labels: GroupIndex::build(text, Reference::LABEL_OPEN, Reference::LABEL_CLOSE),
            targets: GroupIndex::build(text, Reference::TARGET_OPEN, Reference::TARGET_CLOSE),
            last_end: 0,
        }
    }

    /// Attempts to parse a reference at the current position.
    ///
    /// On failure the cursor is restored.
    fn try_parse_reference(&mut self) -> Option<(&'a str, &'a str)> {
        let saved = self.cur.clone();
        if self.kind == ReferenceKind::Image {
            if self.cur.peek() != Some(Image::PREFIX) {
                return None;
            }
            self.cur.bump();
        }

        let parsed = self.cur.take_balanced(&self.labels).and_then(|label| {
            self.cur
                .take_balanced(&self.targets)
                .map(|target| (label, target))
        });

        if parsed.is_none() {
            self.cur = saved;
        }
        parsed
    }
}

impl<'a> Iterator for ReferenceScanner<'a> {
    type Item = Found<'a>;

    fn next(&mut self) -> Option<Found<'a>> {
        while !self.cur.eof() {
            let start = self.cur.i;
            if let Some((label, target)) = self.try_parse_reference() {
                let end = self.cur.i;
                let found = Found {
                    before: &self.text[self.last_end..start],
                    full: &self.text[start..end],
                    label,
                    target,
                    rest: &self.text[end..],
                };
                self.last_end = end;
                return Some(found);
            }
            self.cur.bump();
        }
        None
    }
}

/// Lists every `(alt, url)` image pair in `text`, in order.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    extract_references(text, ReferenceKind::Image)
}

/// Lists every `(text, url)` link pair in `text`, in order.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    extract_references(text, ReferenceKind::Link)
}

fn extract_references(text: &str, kind: ReferenceKind) -> Vec<(String, String)> {
    ReferenceScanner::new(text, kind)
        .map(|found| (found.label.to_string(), found.target.to_string()))
        .collect()
}

/// Replaces every image in the text spans with an image span.
pub fn split_images(spans: Vec<Span>) -> Result<Vec<Span>, MarkdownError> {
    split_references(spans, ReferenceKind::Image)
}

/// Replaces every link in the text spans with a link span.
pub fn split_links(spans: Vec<Span>) -> Result<Vec<Span>, MarkdownError> {
    split_references(spans, ReferenceKind::Link)
}

fn split_references(spans: Vec<Span>, kind: ReferenceKind) -> Result<Vec<Span>, MarkdownError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let mut remaining = span.content.as_str();
        for found in ReferenceScanner::new(&span.content, kind) {
            // The scanner and the reconstruction must agree on the source text.
            if found.full != kind.literal(found.label, found.target) {
                return Err(MarkdownError::MalformedImageOrLink {
                    kind,
                    text: span.content.clone(),
                });
            }
            if !found.before.is_empty() {
                out.push(Span::text(found.before));
            }
            out.push(match kind {
                ReferenceKind::Image => Span::image(found.label, found.target),
                ReferenceKind::Link => Span::link(found.label, found.target),
            });
            remaining = found.rest;
        }
        if !remaining.is_empty() {
            out.push(Span::text(remaining));
        }
    }

    Ok(out)
}
