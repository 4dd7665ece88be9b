//! Output handlers: where messages for the players go.

use std::io::{self, Write};
use std::string::String;
use std::sync::Mutex;

/// Fire-and-forget sink for game messages. Messages carry their own line
/// breaks.
pub trait OutputHandler: Send + Sync {
    fn message(&self, text: &str);
}

/// Writes messages to stdout as they arrive.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutputHandler;

impl OutputHandler for ConsoleOutputHandler {
    fn message(&self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            log::warn!("failed to write to console: {}", e);
        }
    }
}

/// Keeps every message in memory, for replays, simulations and tests.
#[derive(Debug, Default)]
pub struct CapturedOutput {
    transcript: Mutex<String>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn transcript(&self) -> String {
        match self.transcript.lock() {
            Ok(t) => t.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.transcript().contains(needle)
    }
}

impl OutputHandler for CapturedOutput {
    fn message(&self, text: &str) {
        match self.transcript.lock() {
            Ok(mut t) => t.push_str(text),
            Err(poisoned) => poisoned.into_inner().push_str(text),
        }
    }
}
