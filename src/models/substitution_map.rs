//! Byte-to-byte substitution table derived from a key grid.

use crate::constants::{KEY_COUNT, REFERENCE_GRID};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Maps every reference-grid symbol to the symbol now sitting at the same
/// grid index.
///
/// Built in full from a layout every time, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubstitutionMap {
    entries: HashMap<u8, u8>,
}

impl SubstitutionMap {
    /// Creates an empty map. Every byte passes through an empty map unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_capacity(KEY_COUNT),
        }
    }

    /// Builds the mapping from the reference grid to `current`.
    #[must_use]
    pub fn build(current: &[u8; KEY_COUNT]) -> Self {
        let mut map = Self::new();
        map.rebuild(current);
        map
    }

    /// Recomputes all entries from `current`.
    pub fn rebuild(&mut self, current: &[u8; KEY_COUNT]) {
        self.entries.clear();
        for (&original, &replacement) in REFERENCE_GRID.iter().zip(current.iter()) {
            self.entries.insert(original, replacement);
        }
    }

    /// Looks up the replacement for a (lower-case) symbol.
    pub fn get(&self, symbol: u8) -> Option<u8> {
        self.entries.get(&symbol).copied()
    }

    /// Number of entries (40 once built).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has never been built.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if no two symbols map to the same replacement.
    pub fn is_bijection(&self) -> bool {
        let targets: HashSet<u8> = self.entries.values().copied().collect();
        targets.len() == self.entries.len()
    }

    /// Returns true if every symbol maps to itself.
    pub fn is_identity(&self) -> bool {
        self.entries.iter().all(|(k, v)| k == v)
    }

    /// Entries sorted by reference symbol, for display and JSON output.
    pub fn sorted_entries(&self) -> BTreeMap<u8, u8> {
        self.entries.iter().map(|(&k, &v)| (k, v)).collect()
    }

    /// Encodes a chunk in place.
    ///
    /// Each byte is lower-cased for lookup. A hit replaces the byte with the
    /// mapped symbol; a miss leaves the original byte, case included.
    /// Returns the number of bytes replaced.
    pub fn encode_in_place(&self, chunk: &mut [u8]) -> usize {
        let mut substituted = 0;
        for byte in chunk.iter_mut() {
            if let Some(mapped) = self.get(byte.to_ascii_lowercase()) {
                *byte = mapped;
                substituted += 1;
            }
        }
        substituted
    }
}
