/// Heading block type with owned marker knowledge.
///
/// Headings are written as `#` repeated to the level, a space, then the text.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Deepest heading level the editor produces.
    pub const MAX_LEVEL: u8 = 6;

    /// Maps an HTML tag name (`h1`..`h6`) to its heading level.
    pub fn level_for_tag(tag: &str) -> Option<u8> {
        match tag {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    /// Marker prefix for a level, e.g. `###` for level 3.
    pub fn prefix(level: u8) -> String {
        Self::MARKER.to_string().repeat(level as usize)
    }

    /// Detects a heading section and returns `(level, trimmed text)`.
    ///
    /// Longer prefixes are tried first since `######` also starts with `#`.
    pub fn detect(section: &str) -> Option<(u8, &str)> {
        (1..=Self::MAX_LEVEL).rev().find_map(|level| {
            let prefix = Self::prefix(level);
            section
                .strip_prefix(prefix.as_str())
                .map(|rest| (level, rest.trim()))
        })
    }
}
