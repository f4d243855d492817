use super::error::EnhanceError;

/// Lifecycle of the single enhancement a document may have in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnhancementState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed {
        message: String,
    },
}

/// Single-slot guard that makes "no concurrent enhancement" explicit.
///
/// ```text
/// Idle | Succeeded | Failed ──begin──▶ Pending ──succeed──▶ Succeeded
///                                        │
///                                        └──────fail──────▶ Failed
/// ```
///
/// `begin` while `Pending` is rejected with [`EnhanceError::AlreadyInFlight`];
/// `succeed`/`fail` outside `Pending` are ignored.
#[derive(Debug, Clone, Default)]
pub struct EnhancementSlot {
    state: EnhancementState,
}

impl EnhancementSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EnhancementState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, EnhancementState::Pending)
    }

    pub fn begin(&mut self) -> Result<(), EnhanceError> {
        if self.is_busy() {
            return Err(EnhanceError::AlreadyInFlight);
        }
        self.state = EnhancementState::Pending;
        Ok(())
    }

    pub fn succeed(&mut self) {
        if self.is_busy() {
            self.state = EnhancementState::Succeeded;
        } else {
            log::warn!("Ignoring enhancement success while {:?}", self.state);
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        if self.is_busy() {
            self.state = EnhancementState::Failed {
                message: message.into(),
            };
        } else {
            log::warn!("Ignoring enhancement failure while {:?}", self.state);
        }
    }
}
