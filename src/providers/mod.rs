//! External collaborators behind the built-in commands.
//!
//! Both ports ship with stub implementations that never touch the network.
//! A real Sheets or completion client plugs in by implementing the trait and
//! handing it to [`Collaborators`].

mod completion;
mod sheets;

pub use completion::{CompletionProvider, StubCompletionProvider};
pub use sheets::{SheetRows, SheetSource, StubSheetSource};

use std::sync::Arc;

use crate::auth::{ApiKeySource, EnvApiKeySource};
use crate::types::EnvVarName;

/// Everything the default command handlers need.
#[derive(Clone)]
pub struct Collaborators {
    pub sheets: Arc<dyn SheetSource>,
    pub completions: Arc<dyn CompletionProvider>,
    pub api_keys: Arc<dyn ApiKeySource>,
}

impl Collaborators {
    /// Stub sheet and completion providers with the API key read from `api_key_var`.
    pub fn stubbed(api_key_var: impl Into<EnvVarName>) -> Self {
        Self::with_api_keys(Arc::new(EnvApiKeySource::new(api_key_var)))
    }

    /// Stub sheet and completion providers with a caller-supplied key source.
    pub fn with_api_keys(api_keys: Arc<dyn ApiKeySource>) -> Self {
        Self {
            sheets: Arc::new(StubSheetSource),
            completions: Arc::new(StubCompletionProvider),
            api_keys,
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::with_api_keys(Arc::new(EnvApiKeySource::default()))
    }
}
