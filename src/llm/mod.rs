//! LLM Client Layer - OpenAI client construction and one-shot completions
//!
//! This module provides:
//! - Wire types for chat-completion requests and responses
//! - OpenAiClient, a reqwest-backed client for the hosted API
//! - ClientProvider, the initialize-once holder for a shared client

pub mod openai;
pub mod provider;
pub mod types;

pub use openai::OpenAiClient;
pub use provider::ClientProvider;
pub use types::{ChatMessage, ChatRequest, ChatResponse, FinishReason, Role, Usage};
