use crate::enhance::{EnhanceError, EnhancementClient, EnhancementSlot, EnhancementState, Transport};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::structure::{
    DEFAULT_MIN_CONTENT_LENGTH, convert_to_html, extract_structured_content, is_valid_content,
    visible_length,
};

/// The note being written, held as editor HTML.
///
/// A document owns exactly one [`EnhancementSlot`], so at most one
/// enhancement can be in flight for it. Enhancement is split into two steps
/// so the caller can run the network round trip wherever it likes:
///
/// ```rust
/// # use write_watch_engine::editing::NoteDocument;
/// let mut doc = NoteDocument::new("<h2>Intro</h2><p>teh lecture starts</p>");
///
/// let pending = doc.begin_enhancement().unwrap();
/// assert_eq!(pending.structured_text(), "## Intro\n\nteh lecture starts");
/// assert!(doc.is_busy());
///
/// // ... send `pending.structured_text()` to the service ...
/// let reply = Ok("## Intro\n\nThe lecture starts.".to_string());
///
/// doc.finish_enhancement(pending, reply).unwrap();
/// assert_eq!(doc.content(), "<h2>Intro</h2><p>The lecture starts.</p>");
/// ```
#[derive(Debug, Clone)]
pub struct NoteDocument {
    content: String,
    min_content_length: usize,
    slot: EnhancementSlot,
    ticket: Option<u64>,
}

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// An enhancement that has been started and must be finished with
/// [`NoteDocument::finish_enhancement`].
#[derive(Debug)]
pub struct PendingEnhancement {
    structured: String,
    ticket: u64,
}

impl PendingEnhancement {
    /// Structured text to send to the enhancement service.
    pub fn structured_text(&self) -> &str {
        &self.structured
    }
}

impl Default for NoteDocument {
    fn default() -> Self {
        Self::new("")
    }
}

impl NoteDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
            slot: EnhancementSlot::new(),
            ticket: None,
        }
    }

    pub fn with_min_content_length(mut self, min_content_length: usize) -> Self {
        self.min_content_length = min_content_length;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn min_content_length(&self) -> usize {
        self.min_content_length
    }

    pub fn is_valid(&self) -> bool {
        is_valid_content(&self.content, self.min_content_length)
    }

    pub fn is_busy(&self) -> bool {
        self.slot.is_busy()
    }

    pub fn enhancement_state(&self) -> &EnhancementState {
        self.slot.state()
    }

    /// Claims the enhancement slot and extracts the text to send.
    ///
    /// Content below the minimum is rejected before the slot is touched.
    /// Structured text that comes out below the minimum fails the slot.
    pub fn begin_enhancement(&mut self) -> Result<PendingEnhancement, EnhanceError> {
        let min = self.min_content_length;
        if !self.is_valid() {
            return Err(EnhanceError::ContentTooShort {
                min,
                actual: visible_length(&self.content),
            });
        }

        self.slot.begin()?;

        let structured = extract_structured_content(&self.content);
        let actual = structured.trim().chars().count();
        if actual < min {
            let error = EnhanceError::ContentTooShort { min, actual };
            self.slot.fail(error.to_string());
            return Err(error);
        }

        let ticket = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        self.ticket = Some(ticket);
        log::debug!("Started enhancement of {actual} chars of structured text");
        Ok(PendingEnhancement { structured, ticket })
    }

    /// Applies the service result for an enhancement started by
    /// [`begin_enhancement`](Self::begin_enhancement).
    ///
    /// The content is only replaced when the result reconstructs to
    /// non-empty HTML; on any error it stays exactly as it was. A pending
    /// enhancement that this document did not start, or that has already
    /// been finished, is rejected with [`EnhanceError::NotInFlight`] and
    /// changes nothing.
    pub fn finish_enhancement(
        &mut self,
        pending: PendingEnhancement,
        result: Result<String, EnhanceError>,
    ) -> Result<(), EnhanceError> {
        if !self.slot.is_busy() || self.ticket != Some(pending.ticket) {
            log::warn!("Ignoring result for an enhancement this document is not running");
            return Err(EnhanceError::NotInFlight);
        }
        self.ticket = None;

        let outcome = result.and_then(|enhanced| {
            let html = convert_to_html(&enhanced);
            if html.trim().is_empty() {
                Err(EnhanceError::EmptyResult)
            } else {
                Ok(html)
            }
        });

        match outcome {
            Ok(html) => {
                self.content = html;
                self.slot.succeed();
                log::info!("Enhancement applied");
                Ok(())
            }
            Err(error) => {
                log::error!("Enhancement failed: {error}");
                self.slot.fail(error.to_string());
                Err(error)
            }
        }
    }

    /// Runs the whole enhancement round trip against `client`.
    pub fn enhance<T: Transport>(
        &mut self,
        client: &EnhancementClient<T>,
    ) -> Result<(), EnhanceError> {
        let pending = self.begin_enhancement()?;
        let result = client.enhance(pending.structured_text());
        self.finish_enhancement(pending, result)
    }
}
