use regex::Regex;
use std::sync::OnceLock;

fn blank_run_regex() -> &'static Regex {
    static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    BLANK_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"))
}

fn space_run_regex() -> &'static Regex {
    static SPACE_RUN: OnceLock<Regex> = OnceLock::new();
    SPACE_RUN.get_or_init(|| Regex::new(r"[ \t]+").expect("Invalid space run regex"))
}

fn empty_paragraph_regex() -> &'static Regex {
    static EMPTY_PARAGRAPH: OnceLock<Regex> = OnceLock::new();
    EMPTY_PARAGRAPH
        .get_or_init(|| Regex::new(r"<p></p>|<p><br></p>").expect("Invalid empty paragraph regex"))
}

/// Collapses 3+ newlines to one blank line and runs of spaces/tabs to a
/// single space, then trims the result.
pub fn normalize_whitespace(text: &str) -> String {
    let text = blank_run_regex().replace_all(text, "\n\n");
    let text = space_run_regex().replace_all(&text, " ");
    text.trim().to_string()
}

/// [`normalize_whitespace`] followed by removal of empty-paragraph
/// placeholders left behind by the editor.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let normalized = normalize_whitespace(text);
    empty_paragraph_regex()
        .replace_all(&normalized, "")
        .into_owned()
}
