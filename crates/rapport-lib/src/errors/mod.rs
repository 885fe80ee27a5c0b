use std::io::Write;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RapportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid color choice: {0} (expected auto, always or never)")]
    InvalidColorChoice(String),

    #[error("{0}")]
    Application(String),
}

pub type Result<T> = std::result::Result<T, RapportError>;

/// A request to terminate the process with a specific exit code.
///
/// Reporting helpers hand this value back to the entry point instead of
/// exiting themselves; only [`Exit::terminate`] actually ends the process.
#[must_use = "an Exit does nothing until `terminate` is called"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    code: i32,
}

impl Exit {
    pub const SUCCESS: Exit = Exit { code: 0 };
    pub const FAILURE: Exit = Exit { code: 1 };

    pub fn new(code: i32) -> Self {
        Self { code }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    /// Flushes stdout and exits the process with this code.
    pub fn terminate(self) -> ! {
        tracing::debug!(code = self.code, "Terminating process");
        let _ = std::io::stdout().flush();
        std::process::exit(self.code)
    }
}

impl Default for Exit {
    fn default() -> Self {
        Exit::FAILURE
    }
}

/// Reports a fatal error at error level and exits the process with code 1.
///
/// This function never returns (`-> !`). It is intended for unrecoverable
/// errors during initialization or command execution.
pub fn handle_fatal(err: RapportError) -> ! {
    tracing::error!("Fatal error: {}", err);
    crate::output::print_error_and_exit(&err.to_string(), Exit::FAILURE.code())
}
