pub mod editing;
pub mod enhance;
pub mod export;
pub mod io;
pub mod structure;
pub mod video;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{NoteDocument, PendingEnhancement};
pub use enhance::{
    EnhanceError, EnhancementClient, EnhancementSettings, EnhancementSlot, EnhancementState,
    ReqwestTransport, Transport,
};
pub use export::{ExportError, ExportOptions, ExportStyle, export_file_name, export_notes};
pub use io::{IoError, read_input, write_output};
pub use structure::{
    clean_text, convert_to_html, extract_structured_content, is_valid_content,
    process_inline_formatting,
};
pub use video::{VideoError, VideoSource, select_video};
