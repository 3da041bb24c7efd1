use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;
use titan_os::auth::DEFAULT_API_KEY_VAR;
use titan_os::config::{
    DEFAULT_ENV_FILE, DEFAULT_SCAN_DELAY_MS, DEFAULT_STRATEGY, DEFAULT_TASK_DELAY_MS,
};
use titan_os::{Collaborators, CommandArgs, CommandRegistry, DemoSettings, Session, load_env_file};

#[derive(Parser)]
#[command(name = "titan-os")]
#[command(about = "Command registry demo: spreadsheet fetch and AI task dispatch")]
struct Cli {
    /// Environment file loaded before the API key is read
    #[arg(long, global = true, env = "TITAN_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,
    /// Environment variable holding the AI API key
    #[arg(long, global = true, env = "TITAN_API_KEY_VAR", default_value = DEFAULT_API_KEY_VAR)]
    api_key_var: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted demo (default when no subcommand is given)
    Demo(DemoArgs),
    /// Execute a single registered command by name
    Exec {
        /// Command name, e.g. AI_TASK
        name: String,
        /// Keyword argument passed to the command as a string
        #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        args: Vec<(String, String)>,
    },
    /// List registered commands
    List,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Demo(DemoArgs::default())
    }
}

#[derive(Args)]
struct DemoArgs {
    /// Prompt handed to the AI task
    #[arg(long, default_value = DEFAULT_STRATEGY)]
    strategy: String,
    /// Pause during the environment scan, in milliseconds
    #[arg(long, default_value_t = DEFAULT_SCAN_DELAY_MS)]
    scan_delay_ms: u64,
    /// Pause before the AI task, in milliseconds
    #[arg(long, default_value_t = DEFAULT_TASK_DELAY_MS)]
    task_delay_ms: u64,
    /// Skip both pauses
    #[arg(long, default_value_t = false)]
    no_delay: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            strategy: DEFAULT_STRATEGY.to_string(),
            scan_delay_ms: DEFAULT_SCAN_DELAY_MS,
            task_delay_ms: DEFAULT_TASK_DELAY_MS,
            no_delay: false,
        }
    }
}

impl DemoArgs {
    fn into_settings(self) -> DemoSettings {
        let settings = DemoSettings {
            strategy: self.strategy,
            scan_delay: Duration::from_millis(self.scan_delay_ms),
            task_delay: Duration::from_millis(self.task_delay_ms),
        };
        if self.no_delay {
            settings.without_delays()
        } else {
            settings
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut session = Session::start();

    // Before the subscriber, so a RUST_LOG set in the file takes effect.
    let env_file = load_env_file(&cli.env_file);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("titan_os=info".parse()?))
        .with_timer(session.timer())
        .with_writer(io::stderr)
        .init();

    env_file.report();

    let collaborators = Collaborators::stubbed(cli.api_key_var.as_str());

    match cli.command.unwrap_or_default() {
        Commands::Demo(args) => {
            info!("Starting demo run (api key variable: {})", cli.api_key_var);

            let settings = args.into_settings();
            let outcome =
                titan_os::run_demo(&collaborators, settings, io::stdout(), &mut session).await?;

            Ok(ExitCode::from(outcome.exit_status()))
        }
        Commands::Exec { name, args } => {
            let registry = CommandRegistry::with_defaults(&collaborators)?;
            let args: CommandArgs = args
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();

            let outcome = registry.execute(&name, args).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);

            Ok(ExitCode::from(outcome.exit_status()))
        }
        Commands::List => {
            let registry = CommandRegistry::with_defaults(&collaborators)?;
            for (name, description) in registry.descriptions() {
                println!("{:<20} {}", name, description);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Parse a `key=value` pair. The value may itself contain `=`.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", raw))?;
    if key.is_empty() {
        return Err(format!("empty key in `{}`", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
