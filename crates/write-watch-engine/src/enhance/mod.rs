//! # Enhancement Service Boundary
//!
//! Sends structured text to an OpenAI-compatible chat-completions endpoint
//! and turns every failure mode into a typed [`EnhanceError`].
//!
//! ## Modules
//!
//! - **`prompt`**: Fixed system instructions and sampling defaults
//! - **`wire`**: Request/response shapes and body interpretation
//! - **`transport`**: `Transport` seam and the blocking `reqwest` implementation
//! - **`client`**: `EnhancementClient` (enhance, connection test, model listing)
//! - **`session`**: `EnhancementSlot` single in-flight state machine
//! - **`error`**: `EnhanceError`

pub mod client;
pub mod error;
pub mod prompt;
pub mod session;
pub mod transport;
pub mod wire;

pub use client::{EnhancementClient, EnhancementSettings};
pub use error::EnhanceError;
pub use prompt::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, SYSTEM_PROMPT};
pub use session::{EnhancementSlot, EnhancementState};
pub use transport::{HttpReply, ReqwestTransport, Transport, TransportError};
pub use wire::{ChatMessage, EnhancementRequest, ModelInfo, Role};
