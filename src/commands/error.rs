//! Error types for command registration and dispatch.
//!
//! `CommandError` never escapes the registry: it is folded into an ERROR
//! [`CommandOutcome`](super::CommandOutcome) before `execute` returns.

use thiserror::Error;

use crate::auth::ApiKeyError;

/// Message shared by every API key rejection; the reason goes in the detail.
pub const API_KEY_INVALID: &str = "API KEY INVALID";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{}", API_KEY_INVALID)]
    Validation(#[from] ApiKeyError),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Argument `{name}` must be a {expected}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
    },

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    /// A collaborator (sheet source, completion provider) failed.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        reason: String,
    },
}

impl CommandError {
    pub fn upstream(message: &'static str, err: anyhow::Error) -> Self {
        Self::Upstream {
            message,
            reason: format!("{:#}", err),
        }
    }

    /// Extra text carried in the outcome's `error` field.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Validation(inner) => Some(inner.to_string()),
            Self::Upstream { reason, .. } => Some(reason.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Command already registered: {0}")]
    Duplicate(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandOutcome;
    use crate::types::EnvVarName;

    #[test]
    fn test_unknown_command_outcome() {
        let outcome: CommandOutcome = CommandError::UnknownCommand("NOPE".into()).into();
        assert!(outcome.is_error());
        assert_eq!(outcome.message(), "Unknown command: NOPE");
        assert_eq!(outcome.error_detail(), None);
    }

    #[test]
    fn test_validation_outcome_carries_reason() {
        let err = CommandError::from(ApiKeyError::Missing {
            var: EnvVarName::new("OPENAI_API_KEY"),
        });
        let outcome: CommandOutcome = err.into();
        assert_eq!(outcome.message(), "API KEY INVALID");
        assert!(outcome.error_detail().unwrap().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_upstream_outcome() {
        let err = CommandError::upstream("AI request failed", anyhow::anyhow!("timeout"));
        let outcome: CommandOutcome = err.into();
        assert_eq!(outcome.message(), "AI request failed");
        assert_eq!(outcome.error_detail(), Some("timeout"));
    }

    #[test]
    fn test_argument_messages() {
        assert_eq!(
            CommandError::MissingArgument("prompt").to_string(),
            "Missing required argument: prompt"
        );
        assert_eq!(
            CommandError::InvalidArgument {
                name: "prompt",
                expected: "string"
            }
            .to_string(),
            "Argument `prompt` must be a string"
        );
    }
}
