use super::kinds::CodeFence;

/// A source line with its byte range (newline included).
#[derive(Debug, Clone, Copy)]
struct LineRef<'a> {
    start: usize,
    end: usize,
    text: &'a str,
}

fn lines_with_offsets(s: &str) -> impl Iterator<Item = LineRef<'_>> {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |text| {
        let start = offset;
        offset += text.len();
        LineRef {
            start,
            end: offset,
            text,
        }
    })
}

#[derive(Debug, Clone, Copy)]
enum State {
    None,
    Block { start: usize, end: usize },
    /// A block whose last fence is still open; blank lines do not end it.
    Fence { start: usize, end: usize },
}

struct BlockSplitter<'a> {
    src: &'a str,
    fence_aware: bool,
    state: State,
    out: Vec<&'a str>,
}

impl<'a> BlockSplitter<'a> {
    fn new(src: &'a str, fence_aware: bool) -> Self {
        Self {
            src,
            fence_aware,
            state: State::None,
            out: vec![],
        }
    }

    fn push(&mut self, line: LineRef<'_>) {
        let state = self.state;
        self.state = match state {
            State::Fence { start, .. } => {
                if CodeFence::closes(line.text) {
                    State::Block {
                        start,
                        end: line.end,
                    }
                } else {
                    State::Fence {
                        start,
                        end: line.end,
                    }
                }
            }
            _ if line.text.trim().is_empty() => {
                self.flush();
                State::None
            }
            State::None => self.open(line),
            State::Block { start, .. } => State::Block {
                start,
                end: line.end,
            },
        };
    }

    /// Starts a block. Only a block's first line can open a fence.
    fn open(&self, line: LineRef<'_>) -> State {
        let (start, end) = (line.start, line.end);
        if self.fence_aware && CodeFence::opens(line.text) {
            State::Fence { start, end }
        } else {
            State::Block { start, end }
        }
    }

    fn flush(&mut self) {
        if let State::Block { start, end } = std::mem::replace(&mut self.state, State::None) {
            self.emit(start, end);
        }
    }

    fn emit(&mut self, start: usize, end: usize) {
        let src = self.src;
        let block = src[start..end].trim();
        if !block.is_empty() {
            self.out.push(block);
        }
    }

    fn finish(mut self) -> Vec<&'a str> {
        match std::mem::replace(&mut self.state, State::None) {
            State::None => {}
            State::Block { start, end } => self.emit(start, end),
            State::Fence { start, end } => {
                // Unterminated fence: its lines are ordinary text.
                let src = self.src;
                self.out.extend(split(&src[start..end], false));
            }
        }
        self.out
    }
}

fn split(src: &str, fence_aware: bool) -> Vec<&str> {
    let mut splitter = BlockSplitter::new(src, fence_aware);
    for line in lines_with_offsets(src) {
        splitter.push(line);
    }
    splitter.finish()
}

/// Splits a document into trimmed blocks separated by blank lines.
///
/// Runs of blank (or whitespace-only) lines count as one separator and empty
/// blocks are dropped. Blank lines inside a closed ```` ``` ```` fence do not
/// split the block.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    split(markdown, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_split() {
        let markdown = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            split_blocks(markdown),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn no_splitting_on_single_newline() {
        let markdown = "Just one block.\nThis line is still part of it.\nAnd so is this.";
        assert_eq!(split_blocks(markdown), vec![markdown]);
    }

    #[test]
    fn empty_input() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n\t  \n").is_empty());
    }

    #[test]
    fn runs_of_blank_lines_are_one_separator() {
        assert_eq!(split_blocks("a\n\n\n\nb"), vec!["a", "b"]);
        assert_eq!(split_blocks("a\n  \n\t\nb"), vec!["a", "b"]);
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(split_blocks("a\r\nb\r\n\r\nc\r\n"), vec!["a\r\nb", "c"]);
    }

    #[test]
    fn blank_lines_inside_fence_keep_block_together() {
        let markdown = "Intro\n\n```\nfirst\n\nsecond\n```\n\nOutro";
        assert_eq!(
            split_blocks(markdown),
            vec!["Intro", "```\nfirst\n\nsecond\n```", "Outro"]
        );
    }

    #[test]
    fn unterminated_fence_splits_as_text() {
        let markdown = "```\nnever closed\n\nnext block";
        assert_eq!(
            split_blocks(markdown),
            vec!["```\nnever closed", "next block"]
        );
    }

    #[test]
    fn fence_inside_paragraph_does_not_swallow_blank_lines() {
        let markdown = "para\n```python\n\n# Heading\n\nmore\n```";
        assert_eq!(
            split_blocks(markdown),
            vec!["para\n```python", "# Heading", "more\n```"]
        );
    }

    #[test]
    fn single_line_fence_does_not_open() {
        assert_eq!(
            split_blocks("```x = 1```\n\nafter"),
            vec!["```x = 1```", "after"]
        );
    }

    #[test]
    fn order_preserved_and_duplicates_kept() {
        assert_eq!(split_blocks("same\n\nsame\n\nother"), vec!["same", "same", "other"]);
    }
}
