//! Configuration for the hosted chat-completion API.
//!
//! Only the credential comes from the environment; everything else defaults
//! in code and can be overridden by the caller, so the dependency on the
//! API key is visible at the call site instead of buried in a global lookup.

use std::time::Duration;

use log::debug;

use crate::error::{AiError, Result};

/// Environment variable holding the API credential
pub const OPENAI_KEY_VAR: &str = "OPENAI_KEY";

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model to use
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default max tokens for a completion
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for the OpenAI client
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Create a config with an explicit API key and defaults for the rest
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load the credential from the `OPENAI_KEY` environment variable.
    ///
    /// Fails with [`AiError::MissingCredential`] when the variable is unset
    /// or empty. This is the only place the crate reads the environment.
    pub fn from_env() -> Result<Self> {
        match std::env::var(OPENAI_KEY_VAR) {
            Ok(key) if !key.is_empty() => {
                debug!("OpenAiConfig: found {}", OPENAI_KEY_VAR);
                Ok(Self::new(key))
            }
            _ => {
                debug!("OpenAiConfig: {} not set or empty", OPENAI_KEY_VAR);
                Err(AiError::MissingCredential {
                    env_var: OPENAI_KEY_VAR.to_string(),
                })
            }
        }
    }

    /// Override the API base URL (compatible gateways, test servers)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the per-request max token ceiling
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The credential stays out of logs and debug dumps.
impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}
