// src/providers/mod.rs

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::ModelRequest;

pub mod mistral;

/// A chat-completion backend able to answer a [`ModelRequest`].
///
/// Boxed behind `dyn` so the HTTP layer can be handed a fake in tests.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the request once and returns the text of the first choice.
    ///
    /// # Arguments
    /// * `model` - The model identifier, e.g. "pixtral-12b-2409".
    /// * `request` - System and user messages to send.
    async fn complete(&self, model: &str, request: &ModelRequest) -> Result<String>;
}

/// Builds a [`ChatProvider`] for a single request.
///
/// Construction is kept apart from the call so a bad credential can be reported
/// differently from a failed completion.
pub trait ProviderFactory: Send + Sync {
    fn connect(&self) -> Result<Box<dyn ChatProvider>>;

    /// Whether `connect` has what it needs to succeed. Used by the health probe.
    fn is_configured(&self) -> bool {
        true
    }
}
