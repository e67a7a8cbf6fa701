//! Prompt loading
//!
//! The CivicLine server keeps its prompts as plain UTF-8 text files next to
//! its deployment config. Whatever a file contains is the prompt: no
//! templating, no variable substitution, and no caching across calls.

use std::path::Path;

use log::debug;

use crate::error::{AiError, Result};

/// Read the entire contents of a prompt file and return them as a string.
///
/// The content comes back unchanged, trailing newline included. Every call
/// re-reads the file, and the handle is closed before returning on both the
/// success and the failure path. I/O failures keep their original
/// [`std::io::ErrorKind`] (a missing file stays `NotFound`) and gain the
/// offending path in the message.
pub fn load_prompt(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        AiError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to load prompt from {:?}: {}", path, e),
        ))
    })?;
    debug!("loaded prompt from {:?} ({} bytes)", path, content.len());
    Ok(content)
}
