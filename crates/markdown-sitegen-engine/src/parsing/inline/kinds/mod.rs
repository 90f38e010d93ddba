//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "_"`
//! - **`CodeSpan`**: `DELIMITER = "\`"` - content is never split further
//! - **`Reference`**: `[label](target)` syntax shared by links and images,
//!   with `Image::PREFIX = "!"`
//!
//! The parser calls these constants; it never hardcodes `**` or `![`.

pub mod code_span;
pub mod emphasis;
pub mod reference;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use reference::{Image, Reference, ReferenceKind};
