use regex::Regex;
use std::sync::OnceLock;

/// List markers: `• ` for unordered items, `N. ` for ordered items.
///
/// Numbering is 1-based and restarts for every list.
pub struct ListMarker;

impl ListMarker {
    /// The unordered list bullet.
    pub const BULLET: char = '•';

    /// Prefix emitted before an unordered item.
    pub fn bullet_prefix() -> String {
        format!("{} ", Self::BULLET)
    }

    /// Prefix emitted before the item at 1-based `index` of an ordered list.
    pub fn ordered_prefix(index: usize) -> String {
        format!("{index}. ")
    }

    fn ordered_regex() -> &'static Regex {
        static ORDERED_ITEM: OnceLock<Regex> = OnceLock::new();
        ORDERED_ITEM.get_or_init(|| Regex::new(r"^\d+\.\s?").expect("Invalid ordered item regex"))
    }

    /// Whether `line` starts with an ordered marker (`^\d+\.`).
    pub fn is_ordered_item(line: &str) -> bool {
        Self::ordered_regex().is_match(line)
    }

    /// List heuristic for a whole section.
    ///
    /// A bullet anywhere in the section is enough, so prose that happens to
    /// contain `•` mid-sentence is classified as a list. Lines of such a
    /// section without a marker are then dropped by [`ListMarker::item_text`].
    pub fn looks_like_list(section: &str) -> bool {
        section.contains(Self::BULLET) || Self::is_ordered_item(section)
    }

    /// Returns the item text of a list line, or `None` for unmarked lines.
    pub fn item_text(line: &str) -> Option<&str> {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix(Self::BULLET) {
            return Some(rest.trim());
        }
        Self::ordered_regex()
            .find(trimmed)
            .map(|m| trimmed[m.end()..].trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(ListMarker::bullet_prefix(), "• ");
        assert_eq!(ListMarker::ordered_prefix(3), "3. ");
    }

    #[test]
    fn ordered_detection_requires_line_start() {
        assert!(ListMarker::is_ordered_item("12. twelve"));
        assert!(!ListMarker::is_ordered_item("item 12. twelve"));
        assert!(!ListMarker::is_ordered_item("12 twelve"));
    }

    #[test]
    fn bullet_anywhere_looks_like_list() {
        assert!(ListMarker::looks_like_list("costs 5 • 6"));
        assert!(ListMarker::looks_like_list("1. one"));
        assert!(!ListMarker::looks_like_list("plain prose"));
    }

    #[test]
    fn item_text_strips_markers() {
        assert_eq!(ListMarker::item_text("• one"), Some("one"));
        assert_eq!(ListMarker::item_text("  •two  "), Some("two"));
        assert_eq!(ListMarker::item_text("10. ten"), Some("ten"));
        assert_eq!(ListMarker::item_text("3.tight"), Some("tight"));
        assert_eq!(ListMarker::item_text("no marker"), None);
    }
}
