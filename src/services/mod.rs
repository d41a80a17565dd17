//! Service layer for business logic.
//!
//! This module contains the services that drive the grid from command
//! strings and stream text through the resulting substitution map.

pub mod encoder;
pub mod transformer;

// Re-export commonly used types
pub use encoder::{ChunkReader, EncodeStats, StreamEncoder};
pub use transformer::{InvalidCommandError, SkippedToken, TransformReport, TransformService};
