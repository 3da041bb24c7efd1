use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_STRATEGY: &str = "How can we improve this page?";
pub const DEFAULT_SCAN_DELAY_MS: u64 = 2_000;
pub const DEFAULT_TASK_DELAY_MS: u64 = 1_000;

/// Knobs for the scripted demo run.
///
/// The delays only pace the output; nothing waits on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    /// Prompt handed to `AI_TASK`.
    pub strategy: String,
    pub scan_delay: Duration,
    pub task_delay: Duration,
}

impl DemoSettings {
    /// Same run with both pauses removed.
    pub fn without_delays(self) -> Self {
        Self {
            scan_delay: Duration::ZERO,
            task_delay: Duration::ZERO,
            ..self
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            strategy: DEFAULT_STRATEGY.to_string(),
            scan_delay: Duration::from_millis(DEFAULT_SCAN_DELAY_MS),
            task_delay: Duration::from_millis(DEFAULT_TASK_DELAY_MS),
        }
    }
}

/// What happened when the local environment file was loaded.
#[derive(Debug)]
pub enum EnvFileStatus {
    Loaded(PathBuf),
    NotFound(PathBuf),
    Invalid { path: PathBuf, reason: String },
}

impl EnvFileStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Emit the result to the diagnostic log. Only success is logged at info.
    pub fn report(&self) {
        match self {
            Self::Loaded(path) => info!("Loaded environment from {}", path.display()),
            Self::NotFound(path) => warn!(
                "Environment file {} not found; environment variables must be set manually",
                path.display()
            ),
            Self::Invalid { path, reason } => warn!(
                "Ignoring environment file {}: {}",
                path.display(),
                reason
            ),
        }
    }
}

/// Load `KEY=value` pairs from `path` into the process environment.
///
/// Variables that are already set keep their value. Never fails: a missing or
/// malformed file is reported through the returned status. Every line is
/// parsed before anything is set, so an `Invalid` file leaves the
/// environment untouched.
///
/// Call this before any threads are spawned; it mutates the process
/// environment.
pub fn load_env_file(path: &Path) -> EnvFileStatus {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) => return EnvFileStatus::from_error(path, e),
    };
    if let Err(e) = entries.collect::<Result<Vec<_>, _>>() {
        return EnvFileStatus::from_error(path, e);
    }

    match dotenvy::from_path(path) {
        Ok(()) => EnvFileStatus::Loaded(path.to_path_buf()),
        Err(e) => EnvFileStatus::from_error(path, e),
    }
}

impl EnvFileStatus {
    fn from_error(path: &Path, err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(e) if e.kind() == io::ErrorKind::NotFound => {
                Self::NotFound(path.to_path_buf())
            }
            e => Self::Invalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        }
    }
}
