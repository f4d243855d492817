/// Inline emphasis markers shared by extraction and inline formatting.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
    pub const UNDERLINE: &'static str = "__";

    /// Maps an inline HTML tag to the marker that represents it.
    pub fn marker_for_tag(tag: &str) -> Option<&'static str> {
        match tag {
            "strong" | "b" => Some(Self::BOLD),
            "em" | "i" => Some(Self::ITALIC),
            "u" => Some(Self::UNDERLINE),
            _ => None,
        }
    }

    /// Wraps `content` on both sides with `marker`.
    pub fn wrap(marker: &str, content: &str) -> String {
        format!("{marker}{content}{marker}")
    }
}
