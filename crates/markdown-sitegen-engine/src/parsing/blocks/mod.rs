//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut into trimmed blocks on
//!    blank lines. Fences are raw zones, so blank lines inside them do not cut.
//!
//! 2. **Classification** (`classify`): each block gets exactly one
//!    `BlockKind` from an ordered list of rules; paragraph is the fallback.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks` line-based state machine
//! - **`classify`**: `classify_block` rule dispatch
//!
//! ## Key Invariants
//!
//! - Blocks are borrowed, trimmed slices of the document, in document order
//! - Classification is a pure function of the block text
//! - Nested structures (lists in quotes, etc.) are not recognised

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify_block;
pub use split::split_blocks;
pub use types::BlockKind;
