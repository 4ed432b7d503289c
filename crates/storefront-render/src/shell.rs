//! Page shell: everything around the sections.

use std::fmt::Write as _;

use crate::escape::escape_html;

#[derive(Debug, Clone)]
enum HeadTag {
    Meta { name: String, content: String },
    /// Inline CSS, written unescaped.
    Style(String),
}

/// Contents of `<head>`.
#[derive(Debug, Clone)]
pub struct HeadContent {
    pub title: String,
    tags: Vec<HeadTag>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
        }
    }

    /// Add a `<meta name=.. content=..>` tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.tags.push(HeadTag::Meta {
            name: name.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Add an inline `<style>` block. The CSS is trusted.
    pub fn with_style(mut self, css: &str) -> Self {
        self.tags.push(HeadTag::Style(css.to_string()));
        self
    }

    /// Render the head children, one tag per line. Title and meta values are
    /// escaped.
    pub fn render(&self) -> String {
        let mut html = format!("<title>{}</title>\n", escape_html(&self.title));
        for tag in &self.tags {
            // Writing into a String cannot fail.
            let _ = match tag {
                HeadTag::Meta { name, content } => writeln!(
                    html,
                    r#"<meta name="{}" content="{}">"#,
                    escape_html(name),
                    escape_html(content)
                ),
                HeadTag::Style(css) => writeln!(html, "<style>{}</style>", css),
            };
        }
        html
    }
}

/// Opening and closing halves of a page, with sections written in between.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    /// Markup after `</head>` and before the first section.
    pub body_start: String,
    /// Markup after the last section, up to and including `</html>`.
    pub body_end: String,
}

impl Shell {
    /// Shell with a bare `<body><main>` wrapper.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Doctype, `<html>`, the full head and `body_start`.
    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n{}</head>\n{}",
            self.head.render(),
            self.body_start
        )
    }

    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render_escapes_title() {
        let head = HeadContent::new("Tees & Tops")
            .with_meta("viewport", "width=device-width, initial-scale=1");
        let html = head.render();
        assert!(html.contains("<title>Tees &amp; Tops</title>"));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#));
    }

    #[test]
    fn test_head_keeps_tag_order() {
        let html = HeadContent::new("Shop")
            .with_style("a{}")
            .with_meta("description", "x")
            .render();
        assert!(html.find("<style>").unwrap() < html.find("<meta").unwrap());
    }

    #[test]
    fn test_shell_opening_and_closing() {
        let shell = Shell::new(HeadContent::new("Shop").with_style("body{margin:0}"))
            .with_body_start("<body><main>")
            .with_body_end("</main></body></html>");

        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(opening.contains("<style>body{margin:0}</style>"));
        assert!(opening.ends_with("<body><main>"));
        assert_eq!(shell.render_closing(), "</main></body></html>");
    }
}
