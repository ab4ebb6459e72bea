//! HTML preview rendering
//!
//! Converts the raw generated Markdown to HTML for on-screen preview. This
//! path uses pulldown-cmark rather than the narrow export parser: the
//! preview should show whatever the service produced, while export only
//! trusts the constrained subset. Raw HTML in the service output is
//! neutralized by re-emitting it as escaped text; the one exception is the
//! `<br>` cell line-break convention, which renders as a real hard break.
//! Never used for export.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render Markdown to a sanitized HTML fragment
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);

    let events = parser.map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => {
            if is_line_break_tag(&raw) {
                Event::HardBreak
            } else {
                // Re-emitted as text so push_html escapes it
                Event::Text(raw)
            }
        }
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

/// Render a full standalone preview page around the fragment
pub fn to_page(title: &str, markdown: &str) -> String {
    let body = to_html(markdown);
    format!(
        r#"<!DOCTYPE html>
<html lang="vi">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 50em; margin: 2em auto; line-height: 1.5; }}
h1 {{ text-align: center; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #999; padding: 0.4em 0.6em; vertical-align: top; }}
</style>
</head>
<body>
{body}</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

/// Escape text for safe embedding in HTML
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn is_line_break_tag(raw: &str) -> bool {
    matches!(raw.trim(), "<br>" | "<br/>" | "<br />")
}
