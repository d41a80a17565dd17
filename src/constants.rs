//! Application-wide constants.
//!
//! This module defines the application name, the reference key grid and the
//! defaults shared by the engine, the encoder and the configuration layer.

/// The binary name of the application (also the config directory name).
pub const APP_BINARY_NAME: &str = "keymorph";

/// Number of rows in the key grid.
pub const GRID_ROWS: usize = 4;

/// Number of columns in the key grid.
pub const GRID_COLS: usize = 10;

/// Total number of keys in the grid.
pub const KEY_COUNT: usize = GRID_ROWS * GRID_COLS;

/// The reference 4x10 layout in row-major order.
///
/// ```text
/// 1 2 3 4 5 6 7 8 9 0
/// q w e r t y u i o p
/// a s d f g h j k l ;
/// z x c v b n m , . /
/// ```
pub const REFERENCE_GRID: [u8; KEY_COUNT] = *b"1234567890qwertyuiopasdfghjkl;zxcvbnm,./";

/// Separator between tokens in a command string.
pub const COMMAND_DELIMITER: char = ',';

/// Default number of bytes read per chunk when streaming input.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Largest chunk size accepted from configuration or the command line.
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "KEYMORPH_CONFIG_DIR";
