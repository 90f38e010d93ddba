use std::path::{Path, PathBuf};

use crate::{
    error::MarkdownError,
    html::RenderOptions,
    io::{read_path, scan_markdown_files, write_path},
    parsing::{extract_title, markdown_to_html},
};

use super::{SiteError, Template};

/// One Markdown source and the HTML file it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Renders a document into a full page using the template.
pub fn render_page(
    markdown: &str,
    template: &Template,
    options: &RenderOptions,
) -> Result<String, MarkdownError> {
    let content = markdown_to_html(markdown, options)?;
    let title = extract_title(markdown)?;
    Ok(template.render(&title, &content))
}

/// Reads one Markdown file, renders it and writes the page to `dest`,
/// creating missing parent directories.
pub fn generate_page(
    from: &Path,
    template: &Template,
    dest: &Path,
    options: &RenderOptions,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template
    );

    let markdown = read_path(from).map_err(SiteError::io_at(from))?;
    let page = render_page(&markdown, template, options).map_err(|source| SiteError::Page {
        path: from.to_path_buf(),
        source,
    })?;
    write_path(dest, &page).map_err(SiteError::io_at(dest))
}

/// Every Markdown file below `content_dir`, mapped to its place below
/// `dest_dir` with the extension changed to `.html`.
pub fn page_targets(content_dir: &Path, dest_dir: &Path) -> Result<Vec<PageTarget>, SiteError> {
    let files = scan_markdown_files(content_dir).map_err(SiteError::io_at(content_dir))?;
    Ok(files
        .iter()
        .map(|file| PageTarget {
            source: file.relative_path().to_path(content_dir),
            dest: file.output_path().to_path(dest_dir),
        })
        .collect())
}

/// Generates a page for every Markdown file below `content_dir`, mirroring
/// the directory layout under `dest_dir`. Non-Markdown files are ignored.
///
/// Stops at the first failure. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    options: &RenderOptions,
) -> Result<usize, SiteError> {
    let targets = page_targets(content_dir, dest_dir)?;
    for target in &targets {
        generate_page(&target.source, template, &target.dest, options)?;
    }
    Ok(targets.len())
}
