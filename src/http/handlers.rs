//! Route handlers.
//!
//! The chat handler is the request state machine from the design: the rate
//! check has already run as middleware by the time it executes, so it only
//! validates, builds the prompt, and calls the responder. Every exit path
//! goes through [`Envelope`].

use std::time::Instant;

use axum::{
    extract::rejection::FormRejection,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::chat::{build_prompt, validate};
use crate::http::request::RequestIdExt;
use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Form body of a chat request.
#[derive(Debug, Default, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub chat_history: Option<String>,
}

/// `GET /`: static landing page with the embedded chat client.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// `POST /chat`: validate, build the prompt, call the responder.
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<ChatForm>, FormRejection>,
) -> Response {
    let start = Instant::now();
    let request_id = headers.request_id().to_string();

    // An unparseable body counts as an empty form, not a request error.
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let message = form.message.as_deref().unwrap_or("");
    let envelope = match validate(message, state.chat.max_input_length) {
        Ok(trimmed) => {
            let history = form.chat_history.as_deref().unwrap_or("").trim();
            let prompt = build_prompt(history, trimmed);

            tracing::debug!(
                request_id = %request_id,
                message_chars = trimmed.chars().count(),
                "Dispatching prompt to responder"
            );

            match state.responder.respond(&prompt).await {
                Ok(text) => Envelope::Assistant(text),
                Err(error) => {
                    tracing::error!(
                        request_id = %request_id,
                        error = %error,
                        "Responder call failed"
                    );
                    Envelope::Internal
                }
            }
        }
        Err(reason) => {
            tracing::debug!(
                request_id = %request_id,
                reason = %reason,
                "Rejected chat input"
            );
            Envelope::Invalid(reason)
        }
    };

    metrics::record_chat_request(envelope.outcome(), start);
    envelope.into_response()
}

/// `POST /reset`: acknowledge a client-side history reset.
///
/// Reports success without touching limiter state; history lives entirely
/// with the caller, so there is nothing server-side to clear.
pub async fn reset() -> Json<Value> {
    Json(json!({ "status": "Chat history cleared" }))
}
