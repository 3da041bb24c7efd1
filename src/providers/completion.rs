// AI completion provider

use anyhow::Result;
use async_trait::async_trait;

use crate::auth::ApiKey;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produce a completion for `prompt`, authenticating with `api_key`.
    async fn complete(&self, api_key: &ApiKey, prompt: &str) -> Result<String>;
}

/// Echoes the prompt back as a canned analysis; performs no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubCompletionProvider;

#[async_trait]
impl CompletionProvider for StubCompletionProvider {
    async fn complete(&self, _api_key: &ApiKey, prompt: &str) -> Result<String> {
        Ok(format!("Analysis for: {}", prompt))
    }
}
