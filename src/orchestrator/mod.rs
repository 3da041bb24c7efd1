//! Scripted demo run: bootstrap, scan, fetch, authenticate, AI task.
//!
//! Each step writes a stamped progress line to the console sink and
//! delegates real work to the [`CommandRegistry`]. Failures are reported
//! in the returned outcome and never abort the run.

mod clock;
mod session;

pub use clock::{ElapsedTimer, format_elapsed};
pub use session::Session;

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::commands::{Command, CommandOutcome, CommandRegistry};
use crate::config::DemoSettings;
use crate::providers::Collaborators;

/// Writes `[MM:SS:CC] message` lines.
pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn line(&mut self, session: &Session, message: impl Display) -> Result<()> {
        writeln!(self.out, "{} {}", session.stamp(), message)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Runs the demo script against a registry built at bootstrap.
pub struct Orchestrator<W> {
    registry: CommandRegistry,
    settings: DemoSettings,
    console: Console<W>,
}

impl<W: Write> Orchestrator<W> {
    /// Build the command registry and announce it.
    pub fn bootstrap(
        collaborators: &Collaborators,
        settings: DemoSettings,
        mut console: Console<W>,
        session: &Session,
    ) -> Result<Self> {
        console.line(session, format!("LOADED: {}", env!("CARGO_PKG_NAME")))?;
        let registry = CommandRegistry::with_defaults(collaborators)?;
        console.line(session, "SYSTEM: Bootstrapped Command Registry.")?;
        info!(commands = registry.len(), "command registry ready");

        Ok(Self {
            registry,
            settings,
            console,
        })
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    /// Simulated environment scan; only paces the output.
    pub async fn scan_environment(&mut self, session: &Session) -> Result<()> {
        self.console.line(session, "Scanning Environment...")?;
        pause(self.settings.scan_delay).await;
        self.console.line(session, "Environmental Data Synced.")
    }

    pub async fn fetch_sheet_data(&mut self, session: &Session) -> Result<CommandOutcome> {
        self.console
            .line(session, format!("TX >> {}", Command::FetchSheetData.name()))?;
        let outcome = self.registry.dispatch(Command::FetchSheetData).await;

        if outcome.is_success() {
            self.console.line(session, "RX << SUCCESS")?;
            self.console.line(session, "Inventory Updated.")?;
        } else {
            self.console
                .line(session, format!("RX << ERROR: {}", outcome.message()))?;
        }
        Ok(outcome)
    }

    /// Marks the session authenticated. No credentials are checked.
    pub fn authenticate_user(&mut self, session: &mut Session) -> Result<()> {
        session.mark_authenticated();
        self.console.line(session, "USER AUTHENTICATED.")
    }

    pub async fn ai_task(&mut self, session: &Session, strategy: &str) -> Result<CommandOutcome> {
        self.console
            .line(session, format!("AI TASK (strategy): {}", strategy))?;
        let outcome = self.registry.dispatch(Command::ai_task(strategy)).await;

        if outcome.is_error() {
            self.console
                .line(session, format!("AI RESPONSE: ERROR: {}", outcome.message()))?;
        } else {
            let response = outcome.response().unwrap_or("Success");
            self.console
                .line(session, format!("AI RESPONSE: {}", response))?;
        }
        Ok(outcome)
    }

    /// Run every step after bootstrap and return the AI task's outcome.
    pub async fn run_demo(&mut self, session: &mut Session) -> Result<CommandOutcome> {
        self.scan_environment(session).await?;
        self.fetch_sheet_data(session).await?;
        self.authenticate_user(session)?;

        pause(self.settings.task_delay).await;

        let strategy = self.settings.strategy.clone();
        let outcome = self.ai_task(session, &strategy).await?;
        info!(status = %outcome.status(), "demo finished");
        Ok(outcome)
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }
}

async fn pause(delay: std::time::Duration) {
    if !delay.is_zero() {
        debug!(delay_ms = delay.as_millis() as u64, "pacing");
        tokio::time::sleep(delay).await;
    }
}
