use super::kinds::{BlockQuote, Heading, ListMarker};

/// Exact separator between sections of structured text.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// One block-level unit of structured text, borrowed from the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<'a> {
    Heading { level: u8, text: &'a str },
    Quote { text: &'a str },
    List { ordered: bool, items: Vec<&'a str> },
    Paragraph { text: &'a str },
}

/// Splits structured text on [`SECTION_SEPARATOR`] and classifies each
/// non-empty section in document order.
pub fn split_sections(text: &str) -> impl Iterator<Item = Section<'_>> {
    text.split(SECTION_SEPARATOR)
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .map(classify_section)
}

/// Classifies a single trimmed section. First match wins:
/// headings (longest marker first), quote, list, paragraph.
pub fn classify_section(section: &str) -> Section<'_> {
    if let Some((level, text)) = Heading::detect(section) {
        return Section::Heading { level, text };
    }

    if let Some(text) = BlockQuote::detect(section) {
        return Section::Quote { text };
    }

    if ListMarker::looks_like_list(section) {
        // Ordering is decided by the first line only
        let ordered = section
            .lines()
            .next()
            .is_some_and(ListMarker::is_ordered_item);
        let items = section.lines().filter_map(ListMarker::item_text).collect();
        return Section::List { ordered, items };
    }

    Section::Paragraph { text: section }
}
