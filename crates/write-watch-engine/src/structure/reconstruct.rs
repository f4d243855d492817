use super::inline::process_inline_formatting;
use super::section::{Section, split_sections};

/// Rebuilds an HTML fragment from structured text.
///
/// Each blank-line separated section becomes one block element; see
/// [`classify_section`](super::section::classify_section) for how the block
/// type is chosen. Text without any markers comes back as plain paragraphs.
/// Windows line endings are normalized before splitting.
pub fn convert_to_html(structured_text: &str) -> String {
    if structured_text.trim().is_empty() {
        return String::new();
    }

    let normalized = structured_text.replace("\r\n", "\n");
    let mut html = String::with_capacity(normalized.len() * 2);
    for section in split_sections(&normalized) {
        render_section(&section, &mut html);
    }
    log::debug!("reconstructed {} chars of html", html.len());
    html
}

fn render_section(section: &Section<'_>, out: &mut String) {
    match section {
        Section::Heading { level, text } => {
            out.push_str(&format!("<h{level}>{}</h{level}>", render_inline(text)));
        }
        Section::Quote { text } => {
            out.push_str("<blockquote><p>");
            out.push_str(&render_inline(text));
            out.push_str("</p></blockquote>");
        }
        Section::List { ordered, items } => {
            if items.is_empty() {
                return;
            }
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>"));
            for item in items {
                out.push_str("<li>");
                out.push_str(&render_inline(item));
                out.push_str("</li>");
            }
            out.push_str(&format!("</{tag}>"));
        }
        Section::Paragraph { text } => {
            out.push_str("<p>");
            out.push_str(&render_inline(text));
            out.push_str("</p>");
        }
    }
}

/// Escapes text for HTML, then applies inline marker formatting.
fn render_inline(text: &str) -> String {
    process_inline_formatting(&html_escape::encode_text(text))
}
