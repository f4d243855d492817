use regex::Regex;
use std::sync::OnceLock;

/// Minimum visible characters before a document is worth enhancing or exporting.
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 10;

/// What an empty editor serializes to.
const EMPTY_PLACEHOLDERS: [&str; 2] = ["<p><br></p>", "<p></p>"];

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

/// Removes every tag from `html` and trims the remaining text.
pub fn strip_tags(html: &str) -> String {
    tag_regex().replace_all(html, "").trim().to_string()
}

/// Number of visible characters in `html` once tags are stripped.
pub fn visible_length(html: &str) -> usize {
    strip_tags(html).chars().count()
}

/// Whether `html` carries at least `min_length` visible characters and is not
/// an empty-paragraph placeholder.
pub fn is_valid_content(html: &str, min_length: usize) -> bool {
    if html.is_empty() {
        return false;
    }
    if EMPTY_PLACEHOLDERS.contains(&html.trim()) {
        return false;
    }
    visible_length(html) >= min_length
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("<p></p>", false)]
    #[case("  <p><br></p>  ", false)]
    #[case("<p>Hi</p>", false)]
    #[case("<p>Hello there</p>", true)]
    #[case("<p>0123456789</p>", true)]
    #[case("<p>012345678</p>", false)]
    #[case("<h1>Lecture</h1><p>notes</p>", true)]
    fn default_minimum(#[case] html: &str, #[case] expected: bool) {
        assert_eq!(
            is_valid_content(html, DEFAULT_MIN_CONTENT_LENGTH),
            expected
        );
    }

    #[test]
    fn custom_minimum() {
        assert!(is_valid_content("<p>Hi</p>", 2));
        assert!(!is_valid_content("<p>Hi</p>", 3));
    }

    #[test]
    fn placeholder_is_invalid_even_with_zero_minimum() {
        assert!(!is_valid_content("<p></p>", 0));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(visible_length("<p>ééééé</p>"), 5);
    }

    #[test]
    fn strip_tags_trims() {
        assert_eq!(strip_tags("  <p> a <b>b</b> </p> "), "a b");
    }
}
