//! Hosted completion API client.
//!
//! Speaks the widely-implemented chat-completions wire format: POST
//! `{base_url}/v1/chat/completions` with a bearer token, read
//! `choices[0].message.content` from the reply.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ResponderConfig;
use crate::responder::{Responder, ResponderError};

/// Client for a hosted conversation model.
pub struct HostedResponder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionReply {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl HostedResponder {
    /// Create a client from the responder configuration.
    ///
    /// No total request timeout is set: a hanging upstream stalls only the
    /// request that hit it.
    pub fn new(config: &ResponderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl Responder for HostedResponder {
    async fn respond(&self, prompt: &str) -> Result<String, ResponderError> {
        let request = CompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResponderError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let reply: CompletionReply = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ResponderError::EmptyCompletion)
    }
}
