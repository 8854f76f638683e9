//! Conversation responder interface.
//!
//! The gateway never generates text itself; it hands a fully constructed
//! prompt to an external responder and relays the reply. The trait is the
//! substitution seam: production wires in [`hosted::HostedResponder`], tests
//! wire in scripted stands-ins.

use async_trait::async_trait;
use thiserror::Error;

pub mod hosted;

pub use hosted::HostedResponder;

/// Ways a responder call can fail.
///
/// Handlers map every variant to the same opaque internal-error reply;
/// the distinction exists for logs and tests only.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The request never completed (connect failure, closed socket, bad body).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The upstream answered 200 but carried no completion text.
    #[error("upstream reply carried no completion")]
    EmptyCompletion,
}

/// Interface for services that turn a prompt into a reply.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Generate a reply for the given prompt. One attempt, no retries.
    async fn respond(&self, prompt: &str) -> Result<String, ResponderError>;
}
