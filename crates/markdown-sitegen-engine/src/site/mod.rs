//! # Site Generation
//!
//! Turns a content tree, a page template and a static directory into a
//! browsable output directory.
//!
//! - **`template`**: `{{ Title }}` / `{{ Content }}` substitution
//! - **`generate`**: per-page and recursive page generation
//! - **`build`**: the full build driver (`build_site`)

pub mod build;
pub mod generate;
pub mod template;

use std::path::{Path, PathBuf};

use crate::{error::MarkdownError, io::IoError};

pub use build::{BuildReport, build_site};
pub use generate::{PageTarget, generate_page, generate_pages_recursive, page_targets, render_page};
pub use template::Template;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("static directory not found: {0}")]
    MissingStaticDir(PathBuf),
    #[error("output directory {output} contains site input {input}")]
    OutputOverlapsInput { output: PathBuf, input: PathBuf },
    #[error("Failed to load template {path}: {source}")]
    Template { path: PathBuf, source: IoError },
    #[error("I/O error at {path}: {source}")]
    Io { path: PathBuf, source: IoError },
    #[error("Failed to convert {path}: {source}")]
    Page {
        path: PathBuf,
        source: MarkdownError,
    },
}

impl SiteError {
    pub(crate) fn io_at(path: &Path) -> impl FnOnce(IoError) -> SiteError + '_ {
        move |source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
