//! Data models for the key grid, transform commands, and substitution map.
//!
//! Models are independent of I/O: nothing in here reads files or streams.

pub mod command;
pub mod keyboard_grid;
pub mod substitution_map;

// Re-export all model types
pub use command::{parse_commands, TransformCommand};
pub use keyboard_grid::KeyboardGrid;
pub use substitution_map::SubstitutionMap;
