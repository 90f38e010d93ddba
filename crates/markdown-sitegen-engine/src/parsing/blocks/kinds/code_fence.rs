/// The pieces of a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceParts<'a> {
    /// Info string after the opening fence, e.g. `rust` in ```` ```rust ````.
    pub language: Option<&'a str>,
    /// Literal code between the fences.
    pub code: &'a str,
}

pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True when the trimmed block opens and closes with a fence and has
    /// something between them.
    pub fn matches(block: &str) -> bool {
        let t = block.trim();
        t.len() > Self::FENCE.len() * 2 && t.starts_with(Self::FENCE) && t.ends_with(Self::FENCE)
    }

    /// Whether a line opens a fence that stays open past the line.
    ///
    /// A line such as ```` ```inline``` ```` opens and closes on the spot.
    pub fn opens(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::FENCE) && !(t.len() >= Self::FENCE.len() * 2 && t.ends_with(Self::FENCE))
    }

    /// Whether a line inside an open fence closes it.
    pub fn closes(line: &str) -> bool {
        line.trim_end().ends_with(Self::FENCE)
    }

    /// Splits a fenced block into info string and code.
    ///
    /// Exactly one fence is removed from each end; backticks that belong to
    /// the code itself are kept. When the opening fence is followed by a
    /// newline, the rest of that first line is the info string.
    pub fn parts(block: &str) -> FenceParts<'_> {
        let t = block.trim();
        let inner = t
            .strip_prefix(Self::FENCE)
            .and_then(|s| s.strip_suffix(Self::FENCE))
            .unwrap_or(t);

        match inner.split_once('\n') {
            Some((info, code)) => {
                let info = info.trim();
                FenceParts {
                    language: (!info.is_empty()).then_some(info),
                    code,
                }
            }
            None => FenceParts {
                language: None,
                code: inner,
            },
        }
    }
}
