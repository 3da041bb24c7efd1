//! API key lookup and validation for the AI completion provider.
//!
//! The key is looked up when `AI_TASK` runs, not when the registry is built,
//! so a key exported after startup is still picked up.

use std::env;
use std::fmt;

use thiserror::Error;

use crate::types::EnvVarName;

/// Variable consulted when no other name is configured.
pub const DEFAULT_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Literal prefix every accepted key starts with.
pub const API_KEY_PREFIX: &str = "sk-";

/// Why an API key was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("API key not found or empty. Please set the {var} environment variable.")]
    Missing { var: EnvVarName },

    #[error("Invalid API key format. API keys should start with \"{prefix}\"")]
    BadFormat { prefix: &'static str },
}

/// A key that passed [`validate_api_key`].
///
/// `Debug` only shows the prefix so keys never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}***)", API_KEY_PREFIX)
    }
}

/// Check a raw key value.
///
/// Emptiness (after trimming) is checked before the prefix. The prefix test
/// runs on the untrimmed value and nothing beyond the prefix is inspected.
pub fn validate_api_key(var: &EnvVarName, raw: Option<&str>) -> Result<ApiKey, ApiKeyError> {
    let raw = match raw {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(ApiKeyError::Missing { var: var.clone() }),
    };

    if !raw.starts_with(API_KEY_PREFIX) {
        return Err(ApiKeyError::BadFormat {
            prefix: API_KEY_PREFIX,
        });
    }

    Ok(ApiKey(raw.to_string()))
}

/// Where the AI task reads its key from.
pub trait ApiKeySource: Send + Sync {
    /// Name reported in the "missing key" message.
    fn variable(&self) -> &EnvVarName;

    /// Current raw value, if any.
    fn lookup(&self) -> Option<String>;

    fn validated(&self) -> Result<ApiKey, ApiKeyError> {
        let raw = self.lookup();
        validate_api_key(self.variable(), raw.as_deref())
    }
}

/// Reads the key from the process environment on every lookup.
#[derive(Debug, Clone)]
pub struct EnvApiKeySource {
    var: EnvVarName,
}

impl EnvApiKeySource {
    pub fn new(var: impl Into<EnvVarName>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvApiKeySource {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR)
    }
}

impl ApiKeySource for EnvApiKeySource {
    fn variable(&self) -> &EnvVarName {
        &self.var
    }

    /// Only an unset variable counts as absent; a value that is not valid
    /// UTF-8 is converted lossily so it still reaches the prefix check.
    fn lookup(&self) -> Option<String> {
        env::var_os(self.var.as_str()).map(|raw| raw.to_string_lossy().into_owned())
    }
}

/// A key fixed at construction, for embedding and tests.
#[derive(Debug, Clone)]
pub struct FixedApiKeySource {
    var: EnvVarName,
    value: Option<String>,
}

impl FixedApiKeySource {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            var: EnvVarName::new(DEFAULT_API_KEY_VAR),
            value: value.map(str::to_string),
        }
    }

    pub fn unset() -> Self {
        Self::new(None)
    }
}

impl ApiKeySource for FixedApiKeySource {
    fn variable(&self) -> &EnvVarName {
        &self.var
    }

    fn lookup(&self) -> Option<String> {
        self.value.clone()
    }
}
