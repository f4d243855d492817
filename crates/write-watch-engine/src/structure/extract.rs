use scraper::{ElementRef, Html, Node};

use super::clean::normalize_whitespace;
use super::kinds::{BlockQuote, Emphasis, Heading, ListMarker};

/// Flattens an editor HTML fragment into structured text.
///
/// Block elements become marker-prefixed sections separated by blank lines,
/// inline emphasis becomes `**`/`*`/`__` runs and `<br>` becomes a newline.
/// Unknown tags are transparent: their text survives without a marker.
///
/// Empty input, or a fragment with no text (such as `<p><br></p>`), yields
/// an empty string.
pub fn extract_structured_content(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let raw = extract_children(fragment.root_element());
    let structured = normalize_whitespace(&raw);
    log::debug!(
        "extracted {} chars of structured text from {} chars of html",
        structured.len(),
        html.len()
    );
    structured
}

/// Extracts the concatenated output of every child node of `element`.
fn extract_children(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    // Trailing space separates adjacent text runs
                    out.push_str(text);
                    out.push(' ');
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    extract_element(child_element, &mut out);
                }
            }
            _ => {}
        }
    }
    out
}

fn extract_element(element: ElementRef<'_>, out: &mut String) {
    let tag = element.value().name();

    if let Some(level) = Heading::level_for_tag(tag) {
        out.push('\n');
        out.push_str(&Heading::prefix(level));
        out.push(' ');
        out.push_str(extract_children(element).trim());
        out.push_str("\n\n");
        return;
    }

    if let Some(marker) = Emphasis::marker_for_tag(tag) {
        out.push_str(&Emphasis::wrap(marker, extract_children(element).trim()));
        return;
    }

    match tag {
        "p" => {
            let content = extract_children(element);
            let content = content.trim();
            if !content.is_empty() {
                out.push_str(content);
                out.push_str("\n\n");
            }
        }
        "ul" => extract_list(element, false, out),
        "ol" => extract_list(element, true, out),
        "blockquote" => {
            out.push('\n');
            out.push(BlockQuote::PREFIX);
            out.push(' ');
            out.push_str(extract_children(element).trim());
            out.push_str("\n\n");
        }
        "br" => out.push('\n'),
        // `li` reached here is inside its own list; the marker is already out.
        _ => out.push_str(&extract_children(element)),
    }
}

/// Emits one marker-prefixed line per non-empty item of a list element.
///
/// Numbering counts element children of this list only, so nested and
/// sibling lists restart at 1.
fn extract_list(list: ElementRef<'_>, ordered: bool, out: &mut String) {
    out.push('\n');
    for (index, item) in list.children().filter_map(ElementRef::wrap).enumerate() {
        let content = extract_children(item);
        let content = content.trim();
        if content.is_empty() {
            continue;
        }
        if ordered {
            out.push_str(&ListMarker::ordered_prefix(index + 1));
        } else {
            out.push_str(&ListMarker::bullet_prefix());
        }
        out.push_str(content);
        out.push('\n');
    }
    out.push('\n');
}
