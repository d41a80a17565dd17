//! Keymorph Library
//!
//! This library provides the core of the keymorph encoder: a 4x10 key grid
//! that can be flipped and shifted, the byte substitution map derived from
//! it, and a chunked stream encoder that applies the map to text.
//!
//! # Examples
//!
//! ```
//! use keymorph::services::TransformService;
//!
//! let (grid, _report) = TransformService::build_grid("H", false).unwrap();
//! let mut text = b"1234567890".to_vec();
//! grid.mapping().encode_in_place(&mut text);
//! assert_eq!(text, b"0987654321");
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
