//! # Inline Parsing
//!
//! Turns the text of one block into typed [`Span`]s.
//!
//! ## Architecture
//!
//! A fixed pipeline of passes, each consuming the previous pass's output.
//! Only `Text` spans are split by later passes, so a link or image produced
//! early is never corrupted by the emphasis passes that follow.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with balanced groups
//! - **`extract`**: single-pass image/link scanner and the split passes
//! - **`delimiter`**: the shared `**` / `_` / `` ` `` split rule
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod delimiter;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod types;

pub use extract::{extract_markdown_images, extract_markdown_links};
pub use parser::parse_inline;
pub use types::{Span, SpanKind};
