//! Rotation module - quarter-turn permutations of the 16 tile states
//!
//! A quarter turn counter-clockwise carries South to East, East to North,
//! North to West and West to South. On the bit layout (S=1, E=2, N=4, W=8)
//! that is a 4-bit rotate-left, tabulated once in [`CCW`]. [`CW`] is its
//! inverse, built at compile time.

use crate::types::{Spin, Tile, TILE_STATES};

/// Counter-clockwise quarter turn, indexed by tile value
pub const CCW: [u8; TILE_STATES] = [0, 2, 4, 6, 8, 10, 12, 14, 1, 3, 5, 7, 9, 11, 13, 15];

/// Clockwise quarter turn, indexed by tile value
pub const CW: [u8; TILE_STATES] = invert(&CCW);

const fn invert(table: &[u8; TILE_STATES]) -> [u8; TILE_STATES] {
    let mut out = [0u8; TILE_STATES];
    let mut i = 0;
    while i < TILE_STATES {
        out[table[i] as usize] = i as u8;
        i += 1;
    }
    out
}

/// Permutation table for a spin direction
pub fn table(spin: Spin) -> &'static [u8; TILE_STATES] {
    match spin {
        Spin::Clockwise => &CW,
        Spin::CounterClockwise => &CCW,
    }
}

/// Apply `table` to `tile` `times` times by chained lookup
///
/// Zero steps is the identity.
pub fn chain(table: &[u8; TILE_STATES], tile: Tile, times: u32) -> Tile {
    let mut curr = tile.bits();
    for _ in 0..times {
        curr = table[curr as usize];
    }
    Tile::from_bits_truncate(curr)
}

/// Rotate a tile a number of quarter turns in the given direction
///
/// ```
/// use loopy_core::rotation::rotate_tile;
/// use loopy_core::types::{Spin, Tile};
///
/// let south = Tile::new(1).unwrap();
/// assert_eq!(rotate_tile(south, Spin::CounterClockwise, 1).bits(), 2);
/// assert_eq!(rotate_tile(south, Spin::Clockwise, 1).bits(), 8);
/// ```
pub fn rotate_tile(tile: Tile, spin: Spin, times: u32) -> Tile {
    chain(table(spin), tile, times)
}
