//! Named commands and the registry that dispatches them.
//!
//! Handlers take their keyword arguments as a JSON object and always answer
//! with a [`CommandOutcome`]; errors are folded into the outcome rather than
//! returned.

mod error;
mod outcome;
mod registry;

mod ai_task;
mod fetch_sheet_data;

pub use ai_task::AiTaskHandler;
pub use error::{API_KEY_INVALID, CommandError, RegistryError};
pub use fetch_sheet_data::FetchSheetDataHandler;
pub use outcome::{CommandOutcome, CommandStatus};
pub use registry::{CommandHandler, CommandRegistry};

use serde_json::Value;

/// Keyword arguments passed to a handler.
pub type CommandArgs = serde_json::Map<String, Value>;

pub const FETCH_SHEET_DATA: &str = "FETCH_SHEET_DATA";
pub const AI_TASK: &str = "AI_TASK";

/// The built-in commands, for callers that know at compile time what they run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchSheetData,
    AiTask { prompt: String },
}

impl Command {
    pub fn ai_task(prompt: impl Into<String>) -> Self {
        Self::AiTask {
            prompt: prompt.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchSheetData => FETCH_SHEET_DATA,
            Self::AiTask { .. } => AI_TASK,
        }
    }

    pub fn into_args(self) -> CommandArgs {
        let mut args = CommandArgs::new();
        match self {
            Self::FetchSheetData => {}
            Self::AiTask { prompt } => {
                args.insert("prompt".to_string(), Value::String(prompt));
            }
        }
        args
    }
}

/// Remove a required string argument.
pub(crate) fn take_string(
    args: &mut CommandArgs,
    name: &'static str,
) -> Result<String, CommandError> {
    match args.remove(name) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(CommandError::InvalidArgument {
            name,
            expected: "string",
        }),
        None => Err(CommandError::MissingArgument(name)),
    }
}

/// Fail on the first argument nobody consumed.
pub(crate) fn reject_remaining(args: &CommandArgs) -> Result<(), CommandError> {
    match args.keys().next() {
        Some(key) => Err(CommandError::UnexpectedArgument(key.clone())),
        None => Ok(()),
    }
}
