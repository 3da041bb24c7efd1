//! Elapsed-time stamps of the form `[MM:SS:CC]`.

use std::fmt;
use std::time::{Duration, Instant};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Minutes, seconds and hundredths of `elapsed`.
///
/// Minutes are not wrapped into hours; a two-hour run shows `[120:00:00]`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let minutes = secs / 60;
    let seconds = secs % 60;
    let centis = elapsed.subsec_millis() / 10;
    format!("[{:02}:{:02}:{:02}]", minutes, seconds, centis)
}

/// `tracing_subscriber` timer that prints the same stamp as the progress log.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer {
    started: Instant,
}

impl ElapsedTimer {
    pub fn new(started: Instant) -> Self {
        Self { started }
    }
}

impl FormatTime for ElapsedTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", format_elapsed(self.started.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "[00:00:00]");
    }

    #[test]
    fn test_hundredths_truncate() {
        assert_eq!(format_elapsed(Duration::from_millis(2_019)), "[00:02:01]");
        assert_eq!(format_elapsed(Duration::from_millis(999)), "[00:00:99]");
    }

    #[test]
    fn test_minutes_roll_over() {
        assert_eq!(format_elapsed(Duration::from_millis(61_500)), "[01:01:50]");
        assert_eq!(format_elapsed(Duration::from_secs(60 * 120)), "[120:00:00]");
    }
}
