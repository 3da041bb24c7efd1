//! Command registry for named handlers.
//!
//! Provides a `CommandHandler` trait for implementing commands and a
//! `CommandRegistry` for registering and invoking them by name.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use super::ai_task::AiTaskHandler;
use super::error::{CommandError, RegistryError};
use super::fetch_sheet_data::FetchSheetDataHandler;
use super::{Command, CommandArgs, CommandOutcome};
use crate::providers::Collaborators;
use crate::types::CommandName;

/// Trait for handling command invocations.
pub trait CommandHandler: Send + Sync {
    /// Returns the command's registry name (e.g., "AI_TASK").
    fn name(&self) -> &str;

    /// Returns a one-line description for listings.
    fn description(&self) -> &str;

    /// Executes the command with the given keyword arguments.
    ///
    /// Failures are reported as an ERROR outcome, never as a panic.
    fn execute(
        &self,
        args: CommandArgs,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + '_>>;
}

/// Registry mapping command names to handlers.
///
/// Entries are added while building the registry and never removed.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<CommandName, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `FETCH_SHEET_DATA` and `AI_TASK`.
    pub fn with_defaults(collaborators: &Collaborators) -> Result<Self, RegistryError> {
        Self::new()
            .register_handler(FetchSheetDataHandler::new(collaborators.sheets.clone()))?
            .register_handler(AiTaskHandler::new(
                collaborators.api_keys.clone(),
                collaborators.completions.clone(),
            ))
    }

    /// Register a handler. A name that is already taken is rejected.
    pub fn register(mut self, handler: Arc<dyn CommandHandler>) -> Result<Self, RegistryError> {
        let name = CommandName::new(handler.name());
        if self.handlers.contains_key(&name) {
            return Err(RegistryError::Duplicate(name.into_inner()));
        }
        debug!(command = %name, "registered command");
        self.handlers.insert(name, handler);
        Ok(self)
    }

    /// Register a handler from a type that implements `CommandHandler`.
    pub fn register_handler<T: CommandHandler + 'static>(
        self,
        handler: T,
    ) -> Result<Self, RegistryError> {
        self.register(Arc::new(handler))
    }

    /// Get a handler by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Execute a command by name.
    ///
    /// Unknown names produce an ERROR outcome naming the command. Otherwise
    /// the arguments go to the handler untouched and its outcome comes back
    /// as is.
    pub async fn execute(&self, name: &str, args: CommandArgs) -> CommandOutcome {
        let Some(handler) = self.get(name) else {
            debug!(command = name, "unknown command");
            return CommandError::UnknownCommand(name.to_string()).into();
        };

        debug!(command = name, arg_count = args.len(), "executing command");
        let outcome = handler.execute(args).await;
        debug!(command = name, status = %outcome.status(), "command finished");
        outcome
    }

    /// Execute one of the built-in commands.
    pub async fn dispatch(&self, command: Command) -> CommandOutcome {
        let name = command.name();
        self.execute(name, command.into_args()).await
    }

    /// All registered names, sorted.
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().map(|n| n.to_string()).collect();
        names.sort();
        names
    }

    /// `(name, description)` pairs, sorted by name.
    pub fn descriptions(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .handlers
            .values()
            .map(|h| (h.name().to_string(), h.description().to_string()))
            .collect();
        entries.sort();
        entries
    }

    /// Check if a command with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedApiKeySource;
    use crate::commands::{AI_TASK, CommandStatus, FETCH_SHEET_DATA};
    use serde_json::json;

    /// Reports back exactly what it was called with.
    struct EchoHandler {
        name: &'static str,
    }

    impl CommandHandler for EchoHandler {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "echo arguments"
        }

        fn execute(
            &self,
            args: CommandArgs,
        ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + '_>> {
            Box::pin(async move {
                let body = serde_json::to_string(&args).unwrap();
                CommandOutcome::success_with_response("echo", body)
            })
        }
    }

    fn defaults(key: Option<&str>) -> CommandRegistry {
        let collaborators = Collaborators::with_api_keys(Arc::new(FixedApiKeySource::new(key)));
        CommandRegistry::with_defaults(&collaborators).unwrap()
    }

    fn args(value: serde_json::Value) -> CommandArgs {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults_registered() {
        let registry = defaults(None);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(FETCH_SHEET_DATA));
        assert!(registry.contains(AI_TASK));
        assert_eq!(registry.list_names(), vec!["AI_TASK", "FETCH_SHEET_DATA"]);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let err = CommandRegistry::new()
            .register_handler(EchoHandler { name: "ECHO" })
            .unwrap()
            .register_handler(EchoHandler { name: "ECHO" })
            .err()
            .unwrap();
        assert_eq!(err, RegistryError::Duplicate("ECHO".to_string()));
    }

    #[test]
    fn test_duplicate_builtin_rejected() {
        let err = defaults(None)
            .register_handler(EchoHandler { name: AI_TASK })
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Command already registered: AI_TASK");
    }

    #[tokio::test]
    async fn test_unknown_commands() {
        let registry = defaults(Some("sk-validkey"));
        for name in ["NOPE", "", "fetch_sheet_data", "AI_TASK ", "💥"] {
            let outcome = registry.execute(name, CommandArgs::new()).await;
            assert_eq!(outcome.status(), CommandStatus::Error);
            assert_eq!(outcome.message(), format!("Unknown command: {}", name));
        }
    }

    #[tokio::test]
    async fn test_args_forwarded_unchanged() {
        let registry = CommandRegistry::new()
            .register_handler(EchoHandler { name: "ECHO" })
            .unwrap();
        let sent = args(json!({"prompt": "hi", "n": 3, "nested": {"a": [1, 2]}}));

        let outcome = registry.execute("ECHO", sent.clone()).await;

        let received: CommandArgs = serde_json::from_str(outcome.response().unwrap()).unwrap();
        assert_eq!(received, sent);
    }

    #[tokio::test]
    async fn test_outcome_returned_unchanged() {
        let registry = CommandRegistry::new()
            .register_handler(EchoHandler { name: "ECHO" })
            .unwrap();
        let handler = registry.get("ECHO").unwrap();

        let direct = handler.execute(CommandArgs::new()).await;
        let via_registry = registry.execute("ECHO", CommandArgs::new()).await;
        assert_eq!(direct, via_registry);
    }

    #[tokio::test]
    async fn test_dispatch_typed_commands() {
        let registry = defaults(Some("sk-validkey"));

        let fetched = registry.dispatch(Command::FetchSheetData).await;
        assert_eq!(fetched, CommandOutcome::success("Sheet data fetched successfully"));

        let answered = registry.dispatch(Command::ai_task("test")).await;
        assert_eq!(answered.response(), Some("Analysis for: test"));
    }

    #[test]
    fn test_descriptions_sorted() {
        let registry = defaults(None);
        let names: Vec<String> = registry.descriptions().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, registry.list_names());
    }
}
