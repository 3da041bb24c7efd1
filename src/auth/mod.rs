//! API key handling for the AI task.
//!
//! Keys come from an [`ApiKeySource`]: the process environment in the binary,
//! a fixed value when embedding or testing. Validation is presence plus a
//! `sk-` prefix check, nothing more.

mod api_key;

pub use api_key::{
    API_KEY_PREFIX, ApiKey, ApiKeyError, ApiKeySource, DEFAULT_API_KEY_VAR, EnvApiKeySource,
    FixedApiKeySource, validate_api_key,
};
