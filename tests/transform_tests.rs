//! Library-level tests for grid transforms and the substitution map.

use keymorph::constants::{KEY_COUNT, REFERENCE_GRID};
use keymorph::models::{parse_commands, KeyboardGrid, TransformCommand};
use keymorph::services::{StreamEncoder, TransformService};
use std::io::Cursor;

/// Every command sequence of length <= 3 over a small alphabet.
fn command_sequences() -> Vec<Vec<TransformCommand>> {
    let alphabet = [
        TransformCommand::FlipHorizontal,
        TransformCommand::FlipVertical,
        TransformCommand::Shift(1),
        TransformCommand::Shift(-17),
        TransformCommand::Shift(40),
    ];

    let mut sequences = vec![Vec::new()];
    let mut level: Vec<Vec<TransformCommand>> = vec![Vec::new()];
    for _ in 0..3 {
        level = level
            .iter()
            .flat_map(|seq| {
                alphabet.iter().map(move |cmd| {
                    let mut extended = seq.clone();
                    extended.push(cmd.clone());
                    extended
                })
            })
            .collect();
        sequences.extend(level.iter().cloned());
    }
    sequences
}

fn grid_after(commands: &[TransformCommand]) -> KeyboardGrid {
    let mut grid = KeyboardGrid::new();
    TransformService::apply(&mut grid, commands, true).unwrap();
    grid
}

#[test]
fn test_mapping_is_bijection_after_any_sequence() {
    for seq in command_sequences() {
        let grid = grid_after(&seq);
        assert!(grid.is_permutation(), "not a permutation after {seq:?}");
        assert!(grid.mapping().is_bijection(), "not a bijection after {seq:?}");
        assert_eq!(grid.mapping().len(), KEY_COUNT);
    }
}

#[test]
fn test_flips_self_inverse_from_any_state() {
    for seq in command_sequences() {
        let start = grid_after(&seq);

        let mut h = start.clone();
        h.flip_horizontal();
        h.flip_horizontal();
        assert_eq!(h, start);

        let mut v = start.clone();
        v.flip_vertical();
        v.flip_vertical();
        assert_eq!(v, start);
    }
}

#[test]
fn test_shift_inverse_from_any_state() {
    for seq in command_sequences() {
        let start = grid_after(&seq);
        for n in [-123, -40, -1, 0, 1, 39, 79] {
            let mut grid = start.clone();
            grid.shift(n);
            grid.shift(-n);
            assert_eq!(grid, start);
        }
    }
}

#[test]
fn test_mapping_matches_layout_position() {
    let grid = grid_after(&parse_commands("V,7,H,-2"));
    for (index, &symbol) in REFERENCE_GRID.iter().enumerate() {
        assert_eq!(grid.mapping().get(symbol), Some(grid.keys()[index]));
    }
}

#[test]
fn test_non_alphabet_bytes_untouched() {
    let (grid, _) = TransformService::build_grid("H,V,13", false).unwrap();
    let alphabet: Vec<u8> = REFERENCE_GRID.to_vec();

    let passthrough: Vec<u8> = (0u8..=255)
        .filter(|b| !alphabet.contains(&b.to_ascii_lowercase()))
        .collect();

    let mut out = Vec::new();
    StreamEncoder::new(grid.mapping(), 16)
        .encode(Cursor::new(passthrough.clone()), &mut out)
        .unwrap();
    assert_eq!(out, passthrough);
}

#[test]
fn test_uppercase_letters_encode_like_lowercase() {
    let (grid, _) = TransformService::build_grid("V,5", false).unwrap();
    let encoder = StreamEncoder::new(grid.mapping(), 8);
    assert_eq!(
        encoder.encode_chunk(b"QWERTY"),
        encoder.encode_chunk(b"qwerty")
    );
}
