//! CLI command handlers for keymorph.
//!
//! Each handler owns its clap arguments and an `execute` method returning a
//! [`CliResult`], so `main` only has to map errors to exit codes.

pub mod common;
pub mod encode;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use encode::EncodeArgs;
