pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceParts};
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;
