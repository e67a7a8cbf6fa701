//! OpenAI API client implementation
//!
//! A hand-rolled client for the chat-completions endpoint: one POST per
//! call, no streaming, no retries. The client owns a `reqwest::Client`
//! whose connection pool is the long-lived session state, so one instance
//! should be constructed and shared (see [`crate::llm::ClientProvider`]).

use log::debug;
use reqwest::Client;
use serde_json::{Value, json};

use crate::config::{OPENAI_KEY_VAR, OpenAiConfig};
use crate::error::{AiError, Result};
use crate::llm::types::{ChatRequest, ChatResponse, FinishReason, Usage};

/// Client for the hosted chat-completion API
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a new client from an explicit configuration.
    ///
    /// An empty credential is rejected here, at construction time, so the
    /// failure surfaces before any request is attempted.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(AiError::MissingCredential {
                env_var: OPENAI_KEY_VAR.to_string(),
            });
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    /// Create a client with the credential taken from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAiConfig::from_env()?)
    }

    /// Model this client requests when the caller does not override it
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Endpoint URL for chat completions
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }

    /// Build the JSON body for a chat-completion request
    fn build_request(&self, request: &ChatRequest) -> Value {
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let max_tokens = request.max_tokens.unwrap_or(self.config.max_tokens);

        json!({
            "model": model,
            "max_tokens": max_tokens,
            "messages": request.messages,
        })
    }

    /// Parse the API response into a [`ChatResponse`]
    fn parse_response(&self, body: Value) -> Result<ChatResponse> {
        let choice = body["choices"]
            .get(0)
            .ok_or_else(|| AiError::InvalidResponse("no choices in response".to_string()))?;

        let content = choice["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string();

        let finish_reason = match choice["finish_reason"].as_str() {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        let usage = if let Some(u) = body.get("usage") {
            Usage::new(
                u["prompt_tokens"].as_u64().unwrap_or(0),
                u["completion_tokens"].as_u64().unwrap_or(0),
            )
        } else {
            Usage::default()
        };

        Ok(ChatResponse {
            content,
            finish_reason,
            usage,
        })
    }

    /// Send one request body to the API
    async fn send_request(&self, body: Value) -> Result<Value> {
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// One chat-completion round trip
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        debug!(
            "chat completion: model={} messages={}",
            request.model.as_deref().unwrap_or(&self.config.model),
            request.messages.len()
        );
        let body = self.build_request(&request);
        let response = self.send_request(body).await?;
        self.parse_response(response)
    }

    /// Convenience wrapper: system prompt plus one user message, assistant
    /// text out. This is the whole call the CivicLine server makes.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest::new()
            .with_system_message(system)
            .with_user_message(user);
        let response = self.chat(request).await?;
        Ok(response.content)
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_base", &self.config.api_base)
            .field("model", &self.config.model)
            .finish()
    }
}
