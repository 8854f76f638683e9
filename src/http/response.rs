//! Response envelope shaping.
//!
//! Every chat outcome leaves the gateway through [`Envelope`], so clients
//! only ever see one of four shapes. Responder failure details stay in the
//! logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::chat::ValidationError;

/// Terminal outcome of a chat request.
#[derive(Debug)]
pub enum Envelope {
    /// The responder produced a reply.
    Assistant(String),

    /// The client spent its window budget.
    RateLimited { limit: u32 },

    /// The message failed validation.
    Invalid(ValidationError),

    /// The responder call failed; the cause is deliberately withheld.
    Internal,
}

impl Envelope {
    /// Outcome label used for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Envelope::Assistant(_) => "ok",
            Envelope::RateLimited { .. } => "rate_limited",
            Envelope::Invalid(_) => "invalid",
            Envelope::Internal => "internal_error",
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        match self {
            Envelope::Assistant(text) => {
                (StatusCode::OK, Json(json!({ "assistant": text }))).into_response()
            }
            Envelope::RateLimited { limit } => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": format!("Only {} trials allowed per user", limit) })),
            )
                .into_response(),
            Envelope::Invalid(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": reason.to_string() })),
            )
                .into_response(),
            Envelope::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "An error occurred while processing your request" })),
            )
                .into_response(),
        }
    }
}
