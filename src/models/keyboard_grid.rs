//! The 4x10 key grid and its geometric transformations.
//!
//! A [`KeyboardGrid`] starts as a copy of [`REFERENCE_GRID`] and is permuted
//! in place by flips and shifts. After every operation the grid rebuilds its
//! [`SubstitutionMap`], so the map always reflects the current layout.
//!
//! # Index layout
//!
//! ```text
//! row 0:  0  1  2 ...  9
//! row 1: 10 11 12 ... 19
//! row 2: 20 21 22 ... 29
//! row 3: 30 31 32 ... 39
//! ```

use crate::constants::{GRID_COLS, GRID_ROWS, KEY_COUNT, REFERENCE_GRID};
use crate::models::command::TransformCommand;
use crate::models::substitution_map::SubstitutionMap;

/// Mutable permutation of the reference grid plus its derived mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardGrid {
    current: [u8; KEY_COUNT],
    mapping: SubstitutionMap,
}

impl KeyboardGrid {
    /// Creates a grid in the reference layout with an identity mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: REFERENCE_GRID,
            mapping: SubstitutionMap::build(&REFERENCE_GRID),
        }
    }

    /// Current layout, row-major.
    pub const fn keys(&self) -> &[u8; KEY_COUNT] {
        &self.current
    }

    /// Current layout split into rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.current.chunks(GRID_COLS)
    }

    /// Mapping from reference symbols to the current layout.
    pub const fn mapping(&self) -> &SubstitutionMap {
        &self.mapping
    }

    /// Applies one parsed command.
    ///
    /// [`TransformCommand::Invalid`] leaves the layout as it is; the mapping
    /// is still refreshed.
    pub fn apply(&mut self, command: &TransformCommand) {
        match command {
            TransformCommand::FlipHorizontal => self.flip_horizontal(),
            TransformCommand::FlipVertical => self.flip_vertical(),
            TransformCommand::Shift(n) => self.shift(*n),
            TransformCommand::Invalid(_) => self.refresh_mapping(),
        }
    }

    /// Mirrors every row left-to-right (`1` swaps with `0`, `q` with `p`).
    pub fn flip_horizontal(&mut self) {
        for row in self.current.chunks_mut(GRID_COLS) {
            row.reverse();
        }
        self.refresh_mapping();
    }

    /// Mirrors every column top-to-bottom (`1` swaps with `z`, `q` with `a`).
    pub fn flip_vertical(&mut self) {
        for col in 0..GRID_COLS {
            for row in 0..GRID_ROWS / 2 {
                let top = row * GRID_COLS + col;
                let bottom = (GRID_ROWS - 1 - row) * GRID_COLS + col;
                self.current.swap(top, bottom);
            }
        }
        self.refresh_mapping();
    }

    /// Rotates all 40 keys as one ring.
    ///
    /// Positive `n` moves each key `n` places toward higher indices, wrapping
    /// from the end of the bottom row into the top row. Negative `n` moves
    /// keys the other way. Only `n mod 40` matters.
    pub fn shift(&mut self, n: i64) {
        let k = n.rem_euclid(KEY_COUNT as i64) as usize;
        if k != 0 {
            // Three reversals give a right rotation by k.
            self.current.reverse();
            self.current[..k].reverse();
            self.current[k..].reverse();
        }
        self.refresh_mapping();
    }

    /// Rebuilds the substitution map from the current layout.
    pub fn refresh_mapping(&mut self) {
        self.mapping.rebuild(&self.current);
    }

    /// Restores the reference layout.
    pub fn reset(&mut self) {
        self.current = REFERENCE_GRID;
        self.refresh_mapping();
    }

    /// Returns true if every reference symbol appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut sorted = self.current;
        sorted.sort_unstable();
        let mut reference = REFERENCE_GRID;
        reference.sort_unstable();
        sorted == reference
    }
}

impl Default for KeyboardGrid {
    fn default() -> Self {
        Self::new()
    }
}
