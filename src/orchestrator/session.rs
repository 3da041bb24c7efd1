//! Per-run session state.

use std::time::Instant;

use chrono::{DateTime, Utc};

use super::clock::{ElapsedTimer, format_elapsed};

/// State owned by one orchestrator run and passed to each step.
///
/// The wall-clock start is kept for reporting only; stamps are measured on
/// the monotonic clock so a wall-clock step cannot skew them.
#[derive(Debug, Clone)]
pub struct Session {
    started_at: DateTime<Utc>,
    clock: Instant,
    authenticated: bool,
}

impl Session {
    /// Start a session now.
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            clock: Instant::now(),
            authenticated: false,
        }
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn mark_authenticated(&mut self) {
        self.authenticated = true;
    }

    /// `[MM:SS:CC]` stamp for the current moment.
    pub fn stamp(&self) -> String {
        format_elapsed(self.clock.elapsed())
    }

    /// Timer for the diagnostic log, sharing this session's start.
    pub fn timer(&self) -> ElapsedTimer {
        ElapsedTimer::new(self.clock)
    }
}
