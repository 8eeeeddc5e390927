//! Inline Markdown
//!
//! Renders FAQ answers with pulldown-cmark:
//! - Emphasis, strong and strikethrough pass through
//! - Site links (`/registry`) are tagged `data-internal` so the accordion can route them
//! - External links open in a new tab
//! - Raw HTML in the source is escaped, never injected

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown and return an HTML fragment
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

/// Whether a link target is a page of this site
pub fn is_internal_link(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Link { dest_url, .. }) => {
                let html = if is_internal_link(&dest_url) {
                    format!(r#"<a href="{}" data-internal="true">"#, escape_html(&dest_url))
                } else {
                    format!(
                        r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                        escape_html(&dest_url)
                    )
                };
                events.push(Event::Html(CowStr::from(html)));
            }
            Event::End(TagEnd::Link) => {
                events.push(Event::Html(CowStr::from("</a>")));
            }
            Event::Html(raw) | Event::InlineHtml(raw) => {
                events.push(Event::Text(raw));
            }
            other => events.push(other),
        }
    }

    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
