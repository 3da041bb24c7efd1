//! Structured result returned by every command.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandStatus {
    Success,
    Error,
}

impl CommandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a command invocation.
///
/// Fields are private; an outcome is built by a handler and only read after
/// that. At most one of `response` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    status: CommandStatus,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CommandOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: message.into(),
            response: None,
            error: None,
        }
    }

    pub fn success_with_response(message: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            ..Self::success(message)
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Error,
            message: message.into(),
            response: None,
            error: None,
        }
    }

    pub fn error_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: Some(detail.into()),
            ..Self::error(message)
        }
    }

    pub fn status(&self) -> CommandStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == CommandStatus::Error
    }

    /// Process exit status for a run that ended with this outcome.
    pub fn exit_status(&self) -> u8 {
        match self.status {
            CommandStatus::Success => 0,
            CommandStatus::Error => 1,
        }
    }
}

impl From<CommandError> for CommandOutcome {
    fn from(err: CommandError) -> Self {
        let message = err.to_string();
        match err.detail() {
            Some(detail) => Self::error_with_detail(message, detail),
            None => Self::error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_without_payload() {
        let outcome = CommandOutcome::success("Sheet data fetched successfully");
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            json!({"status": "SUCCESS", "message": "Sheet data fetched successfully"})
        );
    }

    #[test]
    fn test_response_payload() {
        let outcome =
            CommandOutcome::success_with_response("AI response generated", "Analysis for: x");
        assert!(outcome.is_success());
        assert_eq!(outcome.response(), Some("Analysis for: x"));
        assert_eq!(outcome.error_detail(), None);

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["response"], "Analysis for: x");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_payload() {
        let outcome = CommandOutcome::error_with_detail("API KEY INVALID", "missing");
        assert!(outcome.is_error());
        assert_eq!(outcome.message(), "API KEY INVALID");
        assert_eq!(outcome.error_detail(), Some("missing"));

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "ERROR");
        assert_eq!(value["error"], "missing");
    }

    #[test]
    fn test_deserialize() {
        let outcome: CommandOutcome =
            serde_json::from_value(json!({"status": "ERROR", "message": "Unknown command: X"}))
                .unwrap();
        assert_eq!(outcome, CommandOutcome::error("Unknown command: X"));
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(CommandOutcome::success("ok").exit_status(), 0);
        assert_eq!(CommandOutcome::error("no").exit_status(), 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CommandStatus::Success.to_string(), "SUCCESS");
        assert_eq!(CommandStatus::Error.to_string(), "ERROR");
    }
}
