//! Command dispatch onto a [`KeyboardGrid`].
//!
//! Turns a command string (inline or from a file) into an ordered list of
//! [`TransformCommand`]s and applies them left to right.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::models::{parse_commands, KeyboardGrid, TransformCommand};

/// A command token that could not be parsed, with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedToken {
    /// Position in the command list (1-based)
    pub position: usize,
    /// Token as written
    pub token: String,
}

/// Outcome of applying a command list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    /// Commands that changed (or could have changed) the grid, in order
    pub applied: Vec<TransformCommand>,
    /// Tokens ignored because they matched no command
    pub skipped: Vec<SkippedToken>,
}

/// Strict-mode failure for an unrecognized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCommandError {
    /// The offending token
    pub token: SkippedToken,
}

impl std::fmt::Display for InvalidCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid transform command '{}' at position {} (expected H, V, or an integer)",
            self.token.token, self.token.position
        )
    }
}

impl std::error::Error for InvalidCommandError {}

/// Service for resolving and applying transform commands.
pub struct TransformService;

impl TransformService {
    /// Reads a command string from a file.
    pub fn load_commands(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read command file {}", path.display()))
    }

    /// Applies `commands` to `grid` in order.
    ///
    /// Invalid tokens are logged and skipped. With `strict` set, the first
    /// invalid token stops processing and is returned as an error; commands
    /// before it have already been applied.
    pub fn apply(
        grid: &mut KeyboardGrid,
        commands: &[TransformCommand],
        strict: bool,
    ) -> Result<TransformReport, InvalidCommandError> {
        let mut report = TransformReport::default();

        for (index, command) in commands.iter().enumerate() {
            let position = index + 1;

            if let TransformCommand::Invalid(token) = command {
                let skipped = SkippedToken {
                    position,
                    token: token.clone(),
                };
                if strict {
                    return Err(InvalidCommandError { token: skipped });
                }
                warn!(position, token = %token, "ignoring unrecognized transform command");
                report.skipped.push(skipped);
            } else {
                debug!(position, command = %command, "applying transform");
                report.applied.push(command.clone());
            }

            grid.apply(command);
        }

        Ok(report)
    }

    /// Builds a grid from a command string in one step.
    pub fn build_grid(
        input: &str,
        strict: bool,
    ) -> Result<(KeyboardGrid, TransformReport), InvalidCommandError> {
        let mut grid = KeyboardGrid::new();
        let commands = parse_commands(input);
        let report = Self::apply(&mut grid, &commands, strict)?;
        Ok((grid, report))
    }
}
