/// Code span inline type with owned delimiter constant.
///
/// Code spans are split last, so their delimiter only ever applies to text
/// that survived the link, image, bold and italic passes.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const DELIMITER: &'static str = "`";
}
