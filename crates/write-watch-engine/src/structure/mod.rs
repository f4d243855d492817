//! # Structured Text Conversion
//!
//! Two-way mapping between editor HTML and the marker-annotated plain text
//! exchanged with the enhancement service.
//!
//! ## Pipeline
//!
//! ```text
//! HTML ─ extract ─▶ structured text ─ (enhancement) ─▶ structured text ─ reconstruct ─▶ HTML
//! ```
//!
//! ## Modules
//!
//! - **`kinds`**: Marker knowledge per block/inline type (Heading, BlockQuote, ListMarker, Emphasis)
//! - **`extract`**: `extract_structured_content()` walks an HTML fragment depth-first
//! - **`section`**: `Section` and `classify_section()` for blank-line separated blocks
//! - **`reconstruct`**: `convert_to_html()` renders sections back to HTML
//! - **`inline`**: `process_inline_formatting()` for `**`, `*`, `__` and line breaks
//! - **`validate`**: `is_valid_content()` guard against empty documents
//! - **`clean`**: whitespace normalization and `clean_text()`
//!
//! ## Supported Subset
//!
//! Headings 1-6, paragraphs, ordered/unordered lists, bold, italic, underline,
//! blockquote and line breaks. Other tags pass their text through unmarked.
//!
//! ## Known Limitations
//!
//! The marker language has no escape syntax. Literal `#`, `>`, `•`, `**`,
//! `__` or a leading `N.` in user prose are read back as structure.

pub mod clean;
pub mod extract;
pub mod inline;
pub mod kinds;
pub mod reconstruct;
pub mod section;
pub mod validate;

#[cfg(test)]
mod tests;

pub use clean::clean_text;
pub use extract::extract_structured_content;
pub use inline::process_inline_formatting;
pub use reconstruct::convert_to_html;
pub use section::{Section, classify_section, split_sections};
pub use validate::{DEFAULT_MIN_CONTENT_LENGTH, is_valid_content, strip_tags, visible_length};
