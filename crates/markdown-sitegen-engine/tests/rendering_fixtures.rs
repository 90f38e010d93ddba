use insta::assert_snapshot;
use markdown_sitegen_engine::{
    MarkdownError, RenderOptions, Template, extract_title, markdown_to_html,
    site::render_page,
};
use pretty_assertions::assert_eq;

#[test]
fn fixture_headings_and_inline() {
    assert_snapshot!(
        render_fixture("pages/headings_and_inline"),
        @r#"<div><h1>Tolkien Fan Club</h1><p>Here's the deal, <b>I like Tolkien</b>.</p><h2>Reasons I like <i>Middle-earth</i></h2><ol><li>It has <b>depth</b></li><li>It uses <code>elvish</code></li><li>It has <a href="https://example.com/maps">maps</a></li></ol></div>"#
    );
}

#[test]
fn fixture_gallery() {
    assert_snapshot!(
        render_fixture("pages/gallery"),
        @r#"<div><h1>Gallery</h1><p><img src="/images/rivendell.png" alt="Rivendell"></img> and <img src="/images/shire.png" alt="Shire"></img></p><ul><li>first</li><li>second</li></ul></div>"#
    );
}

/// Code keeps its own newlines, including the blank line inside the fence
#[test]
fn fixture_quote_and_code() {
    assert_eq!(
        render_fixture("pages/quote_and_code"),
        concat!(
            "<div><h1>Quotes</h1>",
            "<blockquote>All that is gold does not glitter, Not all those who wander are lost.</blockquote>",
            "<pre><code class=\"language-rust\">fn main() {\n\n    println!(\"Mellon\");\n}\n</code></pre>",
            "<ul><li>ring</li><li>sword</li></ul></div>",
        )
    );
}

#[test]
fn fixture_titles() {
    assert_eq!(
        extract_title(&read_fixture("pages/headings_and_inline")).unwrap(),
        "Tolkien Fan Club"
    );
    assert_eq!(extract_title(&read_fixture("pages/gallery")).unwrap(), "Gallery");
}

#[test]
fn fixture_unclosed_bold() {
    let err = markdown_to_html(
        &read_fixture("errors/unclosed_bold"),
        &RenderOptions::default(),
    )
    .unwrap_err();
    assert_snapshot!(err.to_string(), @"Unterminated `**` delimiter in: This **never closes");
}

#[test]
fn fixture_no_title() {
    let result = render_page(
        &read_fixture("errors/no_title"),
        &Template::new("{{ Title }}"),
        &RenderOptions::default(),
    );
    assert!(matches!(result, Err(MarkdownError::MissingTitle)));
}

#[test]
fn fixture_full_page() {
    let page = render_page(
        &read_fixture("pages/gallery"),
        &Template::new("<html><title>{{ Title }}</title><body>{{ Content }}</body></html>"),
        &RenderOptions::default(),
    )
    .unwrap();
    assert!(page.starts_with("<html><title>Gallery</title><body><div><h1>Gallery</h1>"));
    assert!(page.ends_with("</div></body></html>"));
}

fn render_fixture(name: &str) -> String {
    markdown_to_html(&read_fixture(name), &RenderOptions::default()).unwrap()
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}
