/// Blockquote block type. A quote section is a single `> text` line.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the trimmed quote text when the section starts with `>`.
    pub fn detect(section: &str) -> Option<&str> {
        section.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
