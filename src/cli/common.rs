//! Shared error and exit-code types for CLI commands.

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was understood but rejected (bad command token, bad setting)
    ValidationFailed = 1,
    /// A file or stream could not be opened, read, or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Human-readable message (printed after "Error: ")
    pub message: String,
}

impl CliError {
    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// Numeric exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        self.code.code()
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
