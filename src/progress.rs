//! Cosmetic progress reporting around a snapshot run.

/// Sink for human-readable progress updates with a rough percentage.
/// Purely informational; the snapshot result never depends on it.
pub trait Progress {
    fn report(&self, percent: u8, message: &str);
}

/// Writes progress to stderr unless quieted.
pub struct ConsoleProgress {
    quiet: bool,
}

impl ConsoleProgress {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Progress for ConsoleProgress {
    fn report(&self, percent: u8, message: &str) {
        if !self.quiet {
            eprintln!("treesnap: [{percent:>3}%] {message}");
        }
    }
}

/// Discards every update.
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn report(&self, _percent: u8, _message: &str) {}
}
