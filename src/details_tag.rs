use std::borrow::Cow;
use std::io;
use std::io::ErrorKind;

use lazy_static::lazy_static;
use markdown::Options;
use ramhorns::Template;
use regex::Regex;
use spdlog::warn;

/// Same markup the blog's liquid `details` block produced.
pub const DEFAULT_DETAILS_TEMPLATE: &str = r#"<details markdown="1">
<summary><i>{{{summary}}}</i><br/>&nbsp;<br/></summary>

{{{content}}}

</details>
"#;

#[derive(ramhorns::Content)]
struct DetailsView<'a> {
    summary: &'a str,
    content: &'a str,
}

/// Collapsible block around pre-rendered content:
/// `{% details Label %} body {% enddetails %}`
pub struct DetailsTag<'a> {
    template: Template<'a>,
    trailing_newline: bool,
    render_markdown: bool,
}

impl DetailsTag<'static> {
    pub fn with_default_template(render_markdown: bool) -> io::Result<DetailsTag<'static>> {
        DetailsTag::new(DEFAULT_DETAILS_TEMPLATE, render_markdown)
    }

    /// For template text loaded at runtime, like the configured template file.
    pub fn from_source(tpl_src: String, render_markdown: bool) -> io::Result<DetailsTag<'static>> {
        let trailing_newline = tpl_src.ends_with('\n');
        DetailsTag::build(Template::new(tpl_src), trailing_newline, render_markdown)
    }
}

impl<'a> DetailsTag<'a> {
    pub fn new(tpl_src: &'a str, render_markdown: bool) -> io::Result<DetailsTag<'a>> {
        DetailsTag::build(Template::new(tpl_src), tpl_src.ends_with('\n'), render_markdown)
    }

    fn build(
        template: Result<Template<'a>, ramhorns::Error>,
        trailing_newline: bool,
        render_markdown: bool,
    ) -> io::Result<DetailsTag<'a>> {
        let template = match template {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing details template: {}", e)));
            }
        };

        Ok(DetailsTag {
            template,
            trailing_newline,
            render_markdown,
        })
    }

    /// A missing label renders as an empty summary.
    pub fn render(&self, label: Option<&str>, body: &str) -> String {
        let summary = label.unwrap_or("").trim();
        let body = trim_body(body);

        let content: Cow<str> = if self.render_markdown {
            match markdown::to_html_with_options(body, &markdown_options()) {
                Ok(html) => Cow::Owned(html.trim_end().to_string()),
                Err(e) => {
                    warn!("Could not render details body as markdown, keeping it as is: {}", e);
                    Cow::Borrowed(body)
                }
            }
        } else {
            Cow::Borrowed(body)
        };

        let mut rendered = self.template.render(&DetailsView {
            summary,
            content: &content,
        });
        // ramhorns drops the final newline of the template
        if self.trailing_newline && !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        rendered
    }

    /// Replaces every details block in `source`. Blocks may be nested.
    /// Unbalanced markers are kept as they are.
    pub fn expand(&self, source: &str) -> String {
        lazy_static! {
            static ref TAG_REGEX: Regex = Regex::new(
                r"\{%(?P<trim_before>-)?\s*(?P<name>enddetails|details)\b(?P<label>.*?)(?P<trim_after>-)?%\}"
            ).unwrap();
        }

        struct Frame<'s> {
            label: &'s str,
            open_tag: &'s str,
            buf: String,
        }

        let mut root = String::with_capacity(source.len());
        let mut stack: Vec<Frame> = vec![];
        let mut cursor = 0;
        let mut trim_next = false;

        for cap in TAG_REGEX.captures_iter(source) {
            let Some(tag) = cap.get(0) else { continue };
            let mut text = &source[cursor..tag.start()];
            if trim_next {
                text = text.trim_start();
            }
            if cap.name("trim_before").is_some() {
                text = text.trim_end();
            }
            trim_next = cap.name("trim_after").is_some();
            cursor = tag.end();

            let top = stack.last_mut().map(|f| &mut f.buf).unwrap_or(&mut root);
            top.push_str(text);

            let is_open = cap.name("name").map(|m| m.as_str()) == Some("details");
            if is_open {
                stack.push(Frame {
                    label: cap.name("label").map(|m| m.as_str()).unwrap_or(""),
                    open_tag: tag.as_str(),
                    buf: String::new(),
                });
            } else if let Some(frame) = stack.pop() {
                let rendered = self.render(Some(frame.label), &frame.buf);
                let top = stack.last_mut().map(|f| &mut f.buf).unwrap_or(&mut root);
                top.push_str(&rendered);
            } else {
                root.push_str(tag.as_str());
            }
        }

        let mut rest = &source[cursor..];
        if trim_next {
            rest = rest.trim_start();
        }
        let top = stack.last_mut().map(|f| &mut f.buf).unwrap_or(&mut root);
        top.push_str(rest);

        // Unclosed blocks go back as written
        while let Some(frame) = stack.pop() {
            let top = stack.last_mut().map(|f| &mut f.buf).unwrap_or(&mut root);
            top.push_str(frame.open_tag);
            top.push_str(&frame.buf);
        }

        root
    }
}

// The body is already HTML or holds rendered inner blocks, so raw HTML passes through
fn markdown_options() -> Options {
    let mut options = Options::gfm();
    options.compile.allow_dangerous_html = true;
    options
}

// Drops blank lines around the body, keeping the indentation of its first line
fn trim_body(body: &str) -> &str {
    let body = body.trim_end();
    match body.find(|c: char| !c.is_whitespace()) {
        Some(first) => {
            let line_start = body[..first].rfind('\n').map(|n| n + 1).unwrap_or(0);
            &body[line_start..]
        }
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPOILER: &str = r#"<details markdown="1">
<summary><i>Spoiler</i><br/>&nbsp;<br/></summary>

Answer: 42

</details>
"#;

    #[test]
    fn test_render() {
        let tag = DetailsTag::with_default_template(false).unwrap();
        assert_eq!(tag.render(Some("Spoiler"), "Answer: 42"), SPOILER);
        assert_eq!(tag.render(Some("  Spoiler "), "\n\n  \nAnswer: 42\n  \n"), SPOILER);
    }

    #[test]
    fn test_render_missing_label() {
        let tag = DetailsTag::with_default_template(false).unwrap();
        let rendered = tag.render(None, "body");
        assert!(rendered.contains("<summary><i></i><br/>&nbsp;<br/></summary>"));
        assert!(rendered.contains("\n\nbody\n\n"));
    }

    #[test]
    fn test_label_is_not_escaped() {
        let tag = DetailsTag::with_default_template(false).unwrap();
        let rendered = tag.render(Some("Q &amp; A"), "<b>x</b>");
        assert!(rendered.contains("<i>Q &amp; A</i>"));
        assert!(rendered.contains("<b>x</b>"));
    }

    #[test]
    fn test_trim_body() {
        assert_eq!(trim_body("\n\n    code block\n  more\n\n"), "    code block\n  more");
        assert_eq!(trim_body(" \n \n"), "");
        assert_eq!(trim_body("text"), "text");
    }

    #[test]
    fn test_render_markdown() {
        let tag = DetailsTag::with_default_template(true).unwrap();
        let rendered = tag.render(Some("Solution"), "The answer is **42**");
        assert!(rendered.contains("<p>The answer is <strong>42</strong></p>"));
    }

    #[test]
    fn test_render_markdown_keeps_html() {
        let tag = DetailsTag::with_default_template(true).unwrap();
        let rendered = tag.render(Some("x"), "<b>bold</b> text");
        assert!(rendered.contains("<p><b>bold</b> text</p>"));
        assert!(!rendered.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_render_ends_with_newline() {
        let tag = DetailsTag::with_default_template(false).unwrap();
        assert!(tag.render(Some("x"), "y").ends_with("</details>\n"));
        assert!(tag.render(None, "").ends_with("</details>\n"));

        let tag = DetailsTag::from_source("<b>{{{content}}}</b>\n".to_string(), false).unwrap();
        assert_eq!(tag.render(None, "y"), "<b>y</b>\n");
    }

    #[test]
    fn test_template_from_source() {
        let tpl_src = String::from("<details><summary>{{{summary}}}</summary>{{{content}}}</details>");
        let tag = DetailsTag::from_source(tpl_src, false).unwrap();
        assert_eq!(tag.render(Some("Hint"), "body"), "<details><summary>Hint</summary>body</details>");

        let err = DetailsTag::from_source("{{#open}}never closed".to_string(), false).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_custom_template() {
        let tag = DetailsTag::new("<details><summary>{{{summary}}}</summary>{{{content}}}</details>", false).unwrap();
        assert_eq!(tag.render(Some("Hint"), "\ntry harder\n"), "<details><summary>Hint</summary>try harder</details>");
    }

    #[test]
    fn test_expand() {
        let tag = DetailsTag::with_default_template(false).unwrap();
        let source = "Intro\n{% details Spoiler %}\nAnswer: 42\n{% enddetails %}\nOutro\n";
        assert_eq!(tag.expand(source), format!("Intro\n{}\nOutro\n", SPOILER));
    }

    #[test]
    fn test_expand_nested() {
        let tag = DetailsTag::new("[{{{summary}}}:{{{content}}}]", false).unwrap();
        let source = "{% details Outer %}a {% details Inner %}b{% enddetails %} c{% enddetails %}";
        assert_eq!(tag.expand(source), "[Outer:a [Inner:b] c]");
    }

    #[test]
    fn test_expand_nested_markdown() {
        let tag = DetailsTag::with_default_template(true).unwrap();
        let source = "{% details Outer %}\nIntro\n\n{% details Inner %}\ninner\n{% enddetails %}\n{% enddetails %}\n";
        let expanded = tag.expand(source);

        assert!(!expanded.contains("&lt;"));
        assert_eq!(expanded.matches(r#"<details markdown="1">"#).count(), 2);
        assert!(expanded.starts_with("<details markdown=\"1\">\n<summary><i>Outer</i>"));
        assert!(expanded.contains("<p>Intro</p>"));
        assert!(expanded.contains("<details markdown=\"1\">\n<summary><i>Inner</i><br/>&nbsp;<br/></summary>"));
        assert!(expanded.contains("<p>inner</p>"));
        assert!(expanded.ends_with("</details>\n\n</details>\n\n"));
    }

    #[test]
    fn test_expand_whitespace_control() {
        let tag = DetailsTag::new("[{{{summary}}}:{{{content}}}]", false).unwrap();
        let source = "x   {%- details Hint -%}   y   {%- enddetails -%}   z";
        assert_eq!(tag.expand(source), "x[Hint:y]z");
    }

    #[test]
    fn test_expand_unbalanced() {
        let tag = DetailsTag::new("[{{{summary}}}:{{{content}}}]", false).unwrap();
        assert_eq!(tag.expand("a {% enddetails %} b"), "a {% enddetails %} b");
        assert_eq!(tag.expand("a {% details Open %} b"), "a {% details Open %} b");
        assert_eq!(tag.expand("{% details A %}{% details B %}x{% enddetails %}"), "{% details A %}[B:x]");
        assert_eq!(tag.expand("no tags here"), "no tags here");
    }
}
