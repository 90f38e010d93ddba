use relative_path::{RelativePath, RelativePathBuf};

/// A Markdown source inside the content tree, addressed relative to the
/// content root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContentFile {
    relative_path: RelativePathBuf,
}

impl ContentFile {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Path of the generated page relative to the output root.
    ///
    /// Only the extension changes; directories and file stem are kept.
    pub fn output_path(&self) -> RelativePathBuf {
        self.relative_path.with_extension(Self::OUTPUT_EXTENSION)
    }

    /// Whether a file name looks like Markdown content.
    pub fn is_source(path: &std::path::Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == Self::SOURCE_EXTENSION)
    }
}
