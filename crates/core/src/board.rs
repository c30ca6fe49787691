//! Board module - manages the pipe grid
//!
//! The board is a `height x width` grid of [`Tile`]s stored as a flat
//! row-major vector. Coordinates are `(row, col)` with row 0 at the north
//! edge and col 0 at the west edge. Dimensions always stay within
//! `3..=12` on both axes; every structural change is checked before the
//! grid is touched.
//!
//! The puzzle is solved when every pair of adjacent tiles agrees on their
//! shared edge: either both reach it or neither does.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::glyph::UNICODE_MAP;
use crate::rng::SimpleRng;
use crate::rotation::rotate_tile;
use crate::types::{
    Side, Spin, Tile, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH,
    TILE_STATES,
};

/// The pipe grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (row * width + col)
    cells: Vec<Tile>,
}

fn check_size(width: usize, height: usize) -> Result<(), BoardError> {
    if (MIN_WIDTH..=MAX_WIDTH).contains(&width) && (MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
        Ok(())
    } else {
        Err(BoardError::BoardSize { width, height })
    }
}

fn facing_agrees(a: Tile, a_side: Side, b: Tile) -> bool {
    a.faces(a_side) == b.faces(a_side.opposite())
}

impl Board {
    /// Create an empty board
    ///
    /// Fails with [`BoardError::BoardSize`] when either dimension is outside
    /// `3..=12`.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Tile::EMPTY; width * height],
        })
    }

    /// Create a board sized to a row-major matrix and fill it
    ///
    /// The width is taken from the first row; ragged matrices fail in
    /// [`Board::define_level`].
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self, BoardError> {
        let height = matrix.len();
        let width = matrix.first().map_or(0, Vec::len);
        let mut board = Self::new(width, height)?;
        board.define_level(matrix)?;
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    fn checked_index(&self, row: i32, col: i32) -> Result<usize, BoardError> {
        self.index(row, col)
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    /// Tile at (row, col), or an out-of-bounds error
    pub fn get_cell(&self, row: i32, col: i32) -> Result<Tile, BoardError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn set_cell(&mut self, row: i32, col: i32, tile: Tile) -> Result<(), BoardError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = tile;
        Ok(())
    }

    /// Overwrite every cell from a row-major matrix
    ///
    /// The whole matrix is validated (row count, every row length, every
    /// value in `0..=15`) before anything is written.
    pub fn define_level(&mut self, matrix: &[Vec<u8>]) -> Result<(), BoardError> {
        let mismatch = |row, found| BoardError::DimensionMismatch {
            expected_width: self.width,
            expected_height: self.height,
            row,
            found,
        };
        if matrix.len() != self.height {
            return Err(mismatch(None, matrix.len()));
        }

        let mut cells = Vec::with_capacity(self.width * self.height);
        for (row, values) in matrix.iter().enumerate() {
            if values.len() != self.width {
                return Err(mismatch(Some(row), values.len()));
            }
            for (col, &value) in values.iter().enumerate() {
                let tile = Tile::new(value).ok_or(BoardError::InvalidTile { row, col, value })?;
                cells.push(tile);
            }
        }

        self.cells = cells;
        Ok(())
    }

    /// Rotate one tile `times` quarter turns and return its new value
    ///
    /// Bounds are checked first, then `times`; neither failure touches the
    /// board.
    pub fn rotate(&mut self, row: i32, col: i32, spin: Spin, times: i32) -> Result<Tile, BoardError> {
        let idx = self.checked_index(row, col)?;
        let steps = u32::try_from(times).map_err(|_| BoardError::NegativeTimes(times))?;
        let next = rotate_tile(self.cells[idx], spin, steps);
        self.cells[idx] = next;
        Ok(next)
    }

    /// Whether every interior shared edge is either used by both tiles or by neither
    ///
    /// Edges on the outer boundary are not checked here.
    pub fn is_complete(&self) -> bool {
        for row in 0..self.height {
            for col in 0..self.width {
                let curr = self.cells[row * self.width + col];
                if row + 1 < self.height {
                    let below = self.cells[(row + 1) * self.width + col];
                    if !facing_agrees(curr, Side::South, below) {
                        return false;
                    }
                }
                if col + 1 < self.width {
                    let right = self.cells[row * self.width + col + 1];
                    if !facing_agrees(curr, Side::East, right) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// In-bounds neighbours of (row, col) with the side they lie on
    pub fn neighbors(&self, row: i32, col: i32) -> ArrayVec<(Side, Tile), 4> {
        let mut out = ArrayVec::new();
        for side in Side::ALL {
            let (dr, dc) = side.offset();
            if let Some(tile) = self.get(row + dr, col + dc) {
                out.push((side, tile));
            }
        }
        out
    }

    /// Sides of (row, col) whose edge disagrees with the neighbour across it
    ///
    /// Out-of-bounds cells have no mismatches.
    pub fn mismatches(&self, row: i32, col: i32) -> ArrayVec<Side, 4> {
        let mut out = ArrayVec::new();
        let Some(curr) = self.get(row, col) else {
            return out;
        };
        for (side, neighbor) in self.neighbors(row, col) {
            if !facing_agrees(curr, side, neighbor) {
                out.push(side);
            }
        }
        out
    }

    /// Number of interior shared edges used by exactly one of their two tiles
    pub fn loose_ends(&self) -> usize {
        let mut count = 0;
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                count += self
                    .mismatches(row, col)
                    .iter()
                    .filter(|s| matches!(s, Side::South | Side::East))
                    .count();
            }
        }
        count
    }

    /// Rotate every tile clockwise by a count drawn from `turns`
    ///
    /// Tiles only change orientation; they never move between cells. A
    /// negative count aborts with [`BoardError::NegativeTimes`], leaving the
    /// cells visited so far rotated.
    pub fn scramble_with<F>(&mut self, mut turns: F) -> Result<(), BoardError>
    where
        F: FnMut() -> i32,
    {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                self.rotate(row, col, Spin::Clockwise, turns())?;
            }
        }
        Ok(())
    }

    /// Scramble with quarter-turn counts uniform over `0..=3`
    pub fn scramble(&mut self, rng: &mut SimpleRng) {
        // Turn counts from the rng are never negative.
        let _ = self.scramble_with(|| rng.next_turns() as i32);
    }

    /// Flip the edge bit on `side` of (row, col) and the matching bit on the neighbour
    ///
    /// With no neighbour on that side only the local bit flips.
    pub fn toggle_bit(&mut self, row: i32, col: i32, side: Side) -> Result<(), BoardError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggled(side);

        let (dr, dc) = side.offset();
        if let Some(nidx) = self.index(row + dr, col + dc) {
            self.cells[nidx] = self.cells[nidx].toggled(side.opposite());
        }
        Ok(())
    }

    pub fn add_row_to_north(&mut self) -> Result<(), BoardError> {
        check_size(self.width, self.height + 1)?;
        self.cells
            .splice(0..0, std::iter::repeat(Tile::EMPTY).take(self.width));
        self.height += 1;
        tracing::debug!(width = self.width, height = self.height, "added row to north");
        Ok(())
    }

    pub fn remove_row_from_north(&mut self) -> Result<(), BoardError> {
        check_size(self.width, self.height - 1)?;
        self.cells.drain(0..self.width);
        self.height -= 1;
        self.repair_borders();
        tracing::debug!(width = self.width, height = self.height, "removed row from north");
        Ok(())
    }

    pub fn add_row_to_south(&mut self) -> Result<(), BoardError> {
        check_size(self.width, self.height + 1)?;
        self.cells
            .resize(self.cells.len() + self.width, Tile::EMPTY);
        self.height += 1;
        tracing::debug!(width = self.width, height = self.height, "added row to south");
        Ok(())
    }

    pub fn remove_row_from_south(&mut self) -> Result<(), BoardError> {
        check_size(self.width, self.height - 1)?;
        self.cells.truncate(self.cells.len() - self.width);
        self.height -= 1;
        self.repair_borders();
        tracing::debug!(width = self.width, height = self.height, "removed row from south");
        Ok(())
    }

    pub fn add_column_to_west(&mut self) -> Result<(), BoardError> {
        check_size(self.width + 1, self.height)?;
        self.insert_column(0);
        tracing::debug!(width = self.width, height = self.height, "added column to west");
        Ok(())
    }

    pub fn remove_column_from_west(&mut self) -> Result<(), BoardError> {
        check_size(self.width - 1, self.height)?;
        self.delete_column(0);
        self.repair_borders();
        tracing::debug!(width = self.width, height = self.height, "removed column from west");
        Ok(())
    }

    pub fn add_column_to_east(&mut self) -> Result<(), BoardError> {
        check_size(self.width + 1, self.height)?;
        self.insert_column(self.width);
        tracing::debug!(width = self.width, height = self.height, "added column to east");
        Ok(())
    }

    pub fn remove_column_from_east(&mut self) -> Result<(), BoardError> {
        check_size(self.width - 1, self.height)?;
        self.delete_column(self.width - 1);
        self.repair_borders();
        tracing::debug!(width = self.width, height = self.height, "removed column from east");
        Ok(())
    }

    /// Add an empty row or column on the given edge
    pub fn grow(&mut self, side: Side) -> Result<(), BoardError> {
        match side {
            Side::North => self.add_row_to_north(),
            Side::South => self.add_row_to_south(),
            Side::West => self.add_column_to_west(),
            Side::East => self.add_column_to_east(),
        }
    }

    /// Remove the row or column on the given edge
    pub fn shrink(&mut self, side: Side) -> Result<(), BoardError> {
        match side {
            Side::North => self.remove_row_from_north(),
            Side::South => self.remove_row_from_south(),
            Side::West => self.remove_column_from_west(),
            Side::East => self.remove_column_from_east(),
        }
    }

    fn insert_column(&mut self, at: usize) {
        let mut cells = Vec::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            cells.extend_from_slice(&row[..at]);
            cells.push(Tile::EMPTY);
            cells.extend_from_slice(&row[at..]);
        }
        self.cells = cells;
        self.width += 1;
    }

    fn delete_column(&mut self, at: usize) {
        let mut cells = Vec::with_capacity((self.width - 1) * self.height);
        for row in self.cells.chunks(self.width) {
            cells.extend_from_slice(&row[..at]);
            cells.extend_from_slice(&row[at + 1..]);
        }
        self.cells = cells;
        self.width -= 1;
    }

    /// Clear every edge bit that points past the outer boundary
    ///
    /// After a row or column is removed, the tiles along the new edge can
    /// still reach into the space that is gone. Interior tiles are untouched.
    fn repair_borders(&mut self) {
        let (w, h) = (self.width, self.height);
        for col in 0..w {
            self.cells[col] = self.cells[col].without(Side::North);
            let last = (h - 1) * w + col;
            self.cells[last] = self.cells[last].without(Side::South);
        }
        for row in 0..h {
            let first = row * w;
            self.cells[first] = self.cells[first].without(Side::West);
            let last = first + w - 1;
            self.cells[last] = self.cells[last].without(Side::East);
        }
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width)
    }

    /// Get a reference to the internal tiles (row-major)
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Convert to a row-major matrix of raw values
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|t| t.bits()).collect())
            .collect()
    }

    /// Render every tile through `map`, one line per row
    pub fn print_with(&self, map: &[char; TILE_STATES]) -> String {
        self.rows()
            .map(|row| row.iter().map(|t| map[t.index()]).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Glyph grid using box-drawing characters
    pub fn print(&self) -> String {
        self.print_with(&UNICODE_MAP)
    }

    /// Numeric dump, pasteable back into a level file
    ///
    /// ```
    /// use loopy_core::Board;
    ///
    /// let board = Board::default();
    /// assert_eq!(
    ///     board.print_array(),
    ///     "[\n  [ 0,  0,  0],\n  [ 0,  0,  0],\n  [ 0,  0,  0],\n]"
    /// );
    /// ```
    pub fn print_array(&self) -> String {
        let rows = self
            .rows()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|t| format!("{:>2}", t.bits()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("  [{cells}]")
            })
            .collect::<Vec<_>>()
            .join(",\n");
        format!("[\n{rows},\n]")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Tile::EMPTY; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::ASCII_MAP;

    fn tile(v: u8) -> Tile {
        Tile::new(v).unwrap()
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 3), Some(3));
        assert_eq!(board.index(1, 0), Some(4));
        assert_eq!(board.index(2, 3), Some(11));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 4), None);
        assert_eq!(board.index(3, 0), None);
    }

    #[test]
    fn test_default_is_three_by_three() {
        let board = Board::default();
        assert_eq!((board.width(), board.height()), (3, 3));
        assert_eq!(board, Board::new(3, 3).unwrap());
    }

    #[test]
    fn test_define_level_is_all_or_nothing() {
        let mut board = Board::new(3, 3).unwrap();
        board.set_cell(0, 0, tile(5)).unwrap();
        let before = board.clone();

        let bad_value = vec![vec![1, 2, 3], vec![4, 99, 6], vec![7, 8, 9]];
        assert_eq!(
            board.define_level(&bad_value),
            Err(BoardError::InvalidTile {
                row: 1,
                col: 1,
                value: 99
            })
        );
        assert_eq!(board, before);

        let ragged = vec![vec![1, 2, 3], vec![4, 5], vec![7, 8, 9]];
        assert!(matches!(
            board.define_level(&ragged),
            Err(BoardError::DimensionMismatch {
                row: Some(1),
                found: 2,
                ..
            })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_insert_and_delete_column_keep_rows_aligned() {
        let mut board =
            Board::from_matrix(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        board.insert_column(1);
        assert_eq!(
            board.to_matrix(),
            vec![vec![1, 0, 2, 3], vec![4, 0, 5, 6], vec![7, 0, 8, 9]]
        );
        board.delete_column(2);
        assert_eq!(
            board.to_matrix(),
            vec![vec![1, 0, 3], vec![4, 0, 6], vec![7, 0, 9]]
        );
    }

    #[test]
    fn test_repair_borders_only_touches_outward_bits() {
        let mut board = Board::from_matrix(&[
            vec![15, 15, 15],
            vec![15, 15, 15],
            vec![15, 15, 15],
        ])
        .unwrap();
        board.repair_borders();
        assert_eq!(
            board.to_matrix(),
            vec![vec![3, 11, 9], vec![7, 15, 13], vec![6, 14, 12]]
        );
    }

    #[test]
    fn test_print_with_ascii() {
        let board = Board::from_matrix(&[vec![3, 10, 9], vec![5, 0, 5], vec![6, 10, 12]]).unwrap();
        assert_eq!(board.print_with(&ASCII_MAP), "+-+\n| |\n+-+");
        assert_eq!(board.print(), "┏━┓\n┃ ┃\n┗━┛");
        assert_eq!(board.to_string(), board.print());
    }

    #[test]
    fn test_mismatches_and_loose_ends() {
        // Single east stub at (0,0) pointing into an empty tile.
        let board = Board::from_matrix(&[vec![2, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
        assert_eq!(board.mismatches(0, 0).as_slice(), &[Side::East]);
        assert_eq!(board.mismatches(0, 1).as_slice(), &[Side::West]);
        assert_eq!(board.loose_ends(), 1);
        assert!(board.mismatches(-1, 0).is_empty());
    }

    #[test]
    fn test_neighbors_at_corner() {
        let board = Board::default();
        let sides: Vec<Side> = board.neighbors(0, 0).iter().map(|(s, _)| *s).collect();
        assert_eq!(sides, vec![Side::South, Side::East]);
        assert_eq!(board.neighbors(1, 1).len(), 4);
    }

    #[test]
    fn test_scramble_draws_one_count_per_cell() {
        let level = vec![vec![3, 10, 9], vec![5, 0, 5], vec![6, 10, 12]];
        let mut from_rng = Board::from_matrix(&level).unwrap();
        from_rng.scramble(&mut SimpleRng::new(7));

        let mut rng = SimpleRng::new(7);
        let mut from_counts = Board::from_matrix(&level).unwrap();
        from_counts
            .scramble_with(|| rng.next_turns() as i32)
            .unwrap();

        assert_eq!(from_rng, from_counts);
        // Nine cells, nine draws.
        let mut expected = SimpleRng::new(7);
        for _ in 0..9 {
            expected.next_turns();
        }
        assert_eq!(rng.seed(), expected.seed());
    }
}
