// Core modules
pub mod auth;
pub mod commands;
pub mod config;
pub mod providers;
mod types;

pub mod orchestrator;

// Re-export key types and functions
pub use auth::{ApiKeySource, EnvApiKeySource, FixedApiKeySource};
pub use commands::{
    AI_TASK, Command, CommandArgs, CommandHandler, CommandOutcome, CommandRegistry, CommandStatus,
    FETCH_SHEET_DATA,
};
pub use config::{DemoSettings, EnvFileStatus, load_env_file};
pub use orchestrator::{Console, Orchestrator, Session};
pub use providers::Collaborators;
pub use types::{CommandName, EnvVarName};

use std::io::Write;

use anyhow::Result;

/// Bootstrap an orchestrator and run the full demo script.
///
/// Returns the outcome of the final AI task.
pub async fn run_demo<W: Write>(
    collaborators: &Collaborators,
    settings: DemoSettings,
    out: W,
    session: &mut Session,
) -> Result<CommandOutcome> {
    let mut orchestrator =
        Orchestrator::bootstrap(collaborators, settings, Console::new(out), session)?;
    orchestrator.run_demo(session).await
}
