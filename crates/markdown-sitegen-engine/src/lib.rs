pub mod error;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::MarkdownError;
pub use html::{HtmlError, HtmlNode, RenderOptions, ToHtml};
pub use io::*;
pub use models::ContentFile;
pub use parsing::{extract_title, markdown_to_html, markdown_to_html_node};
pub use site::{BuildReport, SiteError, Template, build_site, generate_page, generate_pages_recursive};
