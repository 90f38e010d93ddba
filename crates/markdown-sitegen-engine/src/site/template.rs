use std::fmt;
use std::path::{Path, PathBuf};

use crate::io::read_path;

use super::SiteError;

/// A page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    path: Option<PathBuf>,
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            path: None,
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let source = read_path(path).map_err(|source| SiteError::Template {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Fills every occurrence of both placeholders.
    ///
    /// The title is substituted first, so a title containing the content
    /// placeholder is replaced too.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("<inline template>"),
        }
    }
}
