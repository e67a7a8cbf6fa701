//! Guarded one-time construction of the shared client
//!
//! The original server kept its client in a module-level mutable global
//! behind a check-and-set. The provider replaces that: an owned value the
//! host application threads to whatever needs the API, constructing the
//! client exactly once on first use.

use log::debug;
use once_cell::sync::OnceCell;

use crate::config::OpenAiConfig;
use crate::error::Result;
use crate::llm::openai::OpenAiClient;

/// Lazily constructs and hands out one shared [`OpenAiClient`].
///
/// The first call to [`get`](ClientProvider::get) builds the client; every
/// later call returns the same reference. Concurrent first callers are
/// serialized by the cell, so exactly one construction happens and no caller
/// can observe a half-built handle. Wrap the provider in an `Arc` when
/// multiple owners need it.
#[derive(Debug)]
pub struct ClientProvider {
    config: OpenAiConfig,
    client: OnceCell<OpenAiClient>,
}

impl ClientProvider {
    /// Create a provider from an explicit configuration.
    ///
    /// No I/O happens here; the client is built on the first `get`.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Create a provider with the credential taken from the environment.
    ///
    /// A missing or empty `OPENAI_KEY` fails here, before any client exists
    /// and before any network activity.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(OpenAiConfig::from_env()?))
    }

    /// Return the shared client, constructing it if absent.
    ///
    /// A failed construction leaves the provider empty; the next call tries
    /// again and fails the same way for the same configuration.
    pub fn get(&self) -> Result<&OpenAiClient> {
        self.client.get_or_try_init(|| {
            debug!("constructing OpenAI client (model={})", self.config.model);
            OpenAiClient::new(self.config.clone())
        })
    }

    /// Whether the client has been constructed yet
    pub fn initialized(&self) -> bool {
        self.client.get().is_some()
    }

    /// The configuration this provider builds clients from
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}
