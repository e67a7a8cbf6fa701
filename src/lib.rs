//! civicline-ai - prompt loading and OpenAI client plumbing for the
//! CivicLine server
//!
//! Two jobs: read prompt text verbatim from files, and manage a single
//! shared client for the hosted chat-completion API, built lazily from an
//! explicit configuration. The host application owns the wiring:
//!
//! ```rust,no_run
//! use civicline_ai::{ClientProvider, OpenAiConfig, Result, load_prompt};
//!
//! # async fn run() -> Result<()> {
//! let prompt = load_prompt("prompts/summarize.txt")?;
//! let provider = ClientProvider::new(OpenAiConfig::from_env()?);
//!
//! let client = provider.get()?;
//! let summary = client.complete(&prompt, "Pothole on Elm St, third week now.").await?;
//! # let _ = summary;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;

pub use config::OpenAiConfig;
pub use error::{AiError, Result};
pub use llm::{ChatMessage, ChatRequest, ChatResponse, ClientProvider, OpenAiClient};
pub use prompt::load_prompt;
