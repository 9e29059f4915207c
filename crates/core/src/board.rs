//! Board module - the persistent playfield grid.
//!
//! A 10x30 grid stored as a flat row-major array for cache locality and
//! zero-allocation row shifts. Row 0 is the *bottom* of the playfield; pieces
//! spawn near the top and fall toward row 0. The grid is taller than the
//! visible stack so pieces have headroom at the spawn row.

use blockfall_types::{BoardError, Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;
const GRID_SIZE: usize = WIDTH * HEIGHT;

/// The game board. Every cell holds 0 (empty) or a piece color id 1..=7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major (y * WIDTH + x), row 0 at the bottom.
    cells: [Cell; GRID_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; GRID_SIZE],
        }
    }

    /// Set every cell back to empty.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Result<usize, BoardError> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return Err(BoardError::OutOfBounds { x, y });
        }
        Ok((y as usize) * WIDTH + (x as usize))
    }

    /// Read a cell. Coordinates outside the grid fail with `OutOfBounds`.
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, BoardError> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell, same bounds contract as [`Board::get`].
    pub fn set(&mut self, x: i32, y: i32, value: Cell) -> Result<(), BoardError> {
        let idx = Self::index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// True if the cell is inside the grid and holds a non-empty id.
    /// Cells at or above the top of the grid count as empty (spawn headroom).
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Ok(v) if v != EMPTY_CELL)
    }

    fn is_row_full(&self, y: usize) -> bool {
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|&cell| cell != EMPTY_CELL)
    }

    /// Remove at most one completed row per call.
    ///
    /// Scans from row 0 (bottom) upward. On the first full row, every row
    /// above it shifts down by one (`copy_within` over the flat buffer) and
    /// the topmost row is zeroed; returns true. Returns false, with the grid
    /// untouched, when no row is full.
    ///
    /// Callers clear stacked lines by invoking this once per tick until it
    /// returns false.
    pub fn try_clear_one_line(&mut self) -> bool {
        let Some(full_y) = (0..HEIGHT).find(|&y| self.is_row_full(y)) else {
            return false;
        };

        if full_y < HEIGHT - 1 {
            let src_start = (full_y + 1) * WIDTH;
            let dst_start = full_y * WIDTH;
            self.cells.copy_within(src_start..GRID_SIZE, dst_start);
        }

        // The top row always ends up empty, whether it shifted or was the
        // cleared row itself.
        let top_start = (HEIGHT - 1) * WIDTH;
        self.cells[top_start..].fill(EMPTY_CELL);

        true
    }

    /// All cells in row-major order (row 0 first), for renderers.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy a single row out, bottom-indexed. Test helper.
    #[cfg(test)]
    pub fn row(&self, y: usize) -> [Cell; WIDTH] {
        let start = y * WIDTH;
        let mut out = [EMPTY_CELL; WIDTH];
        out.copy_from_slice(&self.cells[start..start + WIDTH]);
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, value: Cell) {
        for x in 0..BOARD_WIDTH {
            board.set(x, y, value).unwrap();
        }
    }

    #[test]
    fn index_bounds() {
        assert_eq!(Board::index(0, 0), Ok(0));
        assert_eq!(Board::index(9, 0), Ok(9));
        assert_eq!(Board::index(0, 1), Ok(10));
        assert_eq!(Board::index(9, 29), Ok(299));
        assert_eq!(
            Board::index(-1, 0),
            Err(BoardError::OutOfBounds { x: -1, y: 0 })
        );
        assert_eq!(
            Board::index(10, 5),
            Err(BoardError::OutOfBounds { x: 10, y: 5 })
        );
        assert_eq!(
            Board::index(0, 30),
            Err(BoardError::OutOfBounds { x: 0, y: 30 })
        );
    }

    #[test]
    fn get_set_roundtrip() {
        let mut board = Board::new();
        board.set(3, 7, 5).unwrap();
        assert_eq!(board.get(3, 7), Ok(5));
        assert_eq!(board.get(4, 7), Ok(EMPTY_CELL));

        board.set(3, 7, EMPTY_CELL).unwrap();
        assert_eq!(board.get(3, 7), Ok(EMPTY_CELL));
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut board = Board::new();
        board.set(0, 0, 1).unwrap();
        board.set(9, 29, 7).unwrap();
        board.clear();
        assert!(board.cells().iter().all(|&c| c == EMPTY_CELL));
    }

    #[test]
    fn occupied_treats_headroom_as_empty() {
        let mut board = Board::new();
        board.set(4, 10, 2).unwrap();
        assert!(board.occupied(4, 10));
        assert!(!board.occupied(4, 11));
        // Above the grid: not occupied, not an error.
        assert!(!board.occupied(4, BOARD_HEIGHT));
        assert!(!board.occupied(4, BOARD_HEIGHT + 5));
    }

    #[test]
    fn no_full_row_is_a_noop() {
        let mut board = Board::new();
        fill_row(&mut board, 2, 3);
        board.set(5, 2, EMPTY_CELL).unwrap(); // punch a hole
        let before = board.clone();

        assert!(!board.try_clear_one_line());
        assert_eq!(board, before);
    }

    #[test]
    fn clears_lowest_full_row_first() {
        let mut board = Board::new();
        fill_row(&mut board, 1, 1);
        fill_row(&mut board, 4, 2);

        assert!(board.try_clear_one_line());
        // Row 1 went first; row 4's contents moved down to row 3.
        assert!(board.row(3).iter().all(|&c| c == 2));
        assert!(board.row(4).iter().all(|&c| c == EMPTY_CELL));

        assert!(board.try_clear_one_line());
        assert!(!board.try_clear_one_line());
    }

    #[test]
    fn clearing_bottom_row_shifts_everything_down() {
        let mut board = Board::new();
        fill_row(&mut board, 0, 1);
        board.set(2, 1, 6).unwrap();
        board.set(7, 5, 4).unwrap();

        assert!(board.try_clear_one_line());
        assert_eq!(board.get(2, 0), Ok(6));
        assert_eq!(board.get(7, 4), Ok(4));
        assert!(board.row(29).iter().all(|&c| c == EMPTY_CELL));
    }

    #[test]
    fn clearing_top_row_just_zeroes_it() {
        let mut board = Board::new();
        fill_row(&mut board, 29, 7);
        board.set(0, 28, 3).unwrap();

        assert!(board.try_clear_one_line());
        assert!(board.row(29).iter().all(|&c| c == EMPTY_CELL));
        assert_eq!(board.get(0, 28), Ok(3));
    }

    #[test]
    fn middle_row_clear_shifts_only_rows_above() {
        let mut board = Board::new();
        // Distinct pattern below and above the full row.
        board.set(1, 0, 1).unwrap();
        board.set(2, 1, 2).unwrap();
        board.set(3, 2, 3).unwrap();
        fill_row(&mut board, 3, 7);
        board.set(4, 4, 4).unwrap();
        board.set(5, 5, 5).unwrap();

        let below: Vec<_> = (0..3).map(|y| board.row(y)).collect();
        let row4 = board.row(4);
        let row5 = board.row(5);

        assert!(board.try_clear_one_line());

        for (y, row) in below.iter().enumerate() {
            assert_eq!(&board.row(y), row, "row {y} below the clear changed");
        }
        assert_eq!(board.row(3), row4);
        assert_eq!(board.row(4), row5);
        assert!(board.row(29).iter().all(|&c| c == EMPTY_CELL));
    }
}
