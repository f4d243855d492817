pub mod document;

pub use document::{NoteDocument, PendingEnhancement};
