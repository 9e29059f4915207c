//! Piece module - the active falling shape and its kinematics.
//!
//! A piece carries a small 5x5 occupancy grid addressed by signed offsets
//! (-2..=2) around its center cell, plus a world position mapping that center
//! onto the board. All movement goes through [`Piece::can_move`]; a piece can
//! only ever occupy a world position that passed that check, which is what
//! makes [`Piece::insert_into`] safe at rest positions.
//!
//! Rotation remaps every local cell (x, y) -> (-y, x) into a fresh buffer and
//! rolls back wholesale if the rotated shape collides, so callers never
//! observe a partially rotated piece. There are no wall kicks: rotation never
//! nudges the world position.

use arrayvec::ArrayVec;

use blockfall_types::{
    BoardError, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL, PIECE_GRID, PIECE_HALF,
};

use crate::board::Board;

const LOCAL_SIZE: usize = (PIECE_GRID * PIECE_GRID) as usize;

/// Maximum occupied cells in any shape.
const SHAPE_CELLS: usize = 4;

/// The active falling piece.
#[derive(Debug, Clone)]
pub struct Piece {
    kind: PieceKind,
    /// Local occupancy grid; 0 or the piece's color id.
    cells: [Cell; LOCAL_SIZE],
    /// Pre-rotation copy, used to roll back a blocked rotation.
    scratch: [Cell; LOCAL_SIZE],
    /// World position of the local center cell.
    x: i32,
    y: i32,
}

/// The scratch buffer is rotation bookkeeping, not piece identity.
impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.cells == other.cells
            && self.x == other.x
            && self.y == other.y
    }
}

impl Eq for Piece {}

#[inline(always)]
fn local_index(x: i32, y: i32) -> usize {
    debug_assert!((-PIECE_HALF..=PIECE_HALF).contains(&x));
    debug_assert!((-PIECE_HALF..=PIECE_HALF).contains(&y));
    ((y + PIECE_HALF) * PIECE_GRID + (x + PIECE_HALF)) as usize
}

impl Piece {
    /// Create a piece of the given kind with its canonical local shape,
    /// centered at world position (x, y).
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        let mut piece = Self {
            kind,
            cells: [EMPTY_CELL; LOCAL_SIZE],
            scratch: [EMPTY_CELL; LOCAL_SIZE],
            x,
            y,
        };

        let id = kind.cell_id();
        let offsets: [(i32, i32); SHAPE_CELLS] = match kind {
            PieceKind::T => [(0, 1), (0, 0), (0, -1), (-1, 0)],
            PieceKind::L => [(0, 1), (0, 0), (0, -1), (1, -1)],
            PieceKind::J => [(0, 1), (0, 0), (0, -1), (1, 1)],
            PieceKind::Square => [(0, 0), (0, 1), (1, 0), (1, 1)],
            PieceKind::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
            PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
            PieceKind::Long => [(0, -1), (0, 0), (0, 1), (0, 2)],
        };
        for (dx, dy) in offsets {
            piece.cells[local_index(dx, dy)] = id;
        }

        piece
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// World x of the local center.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// World y of the local center.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Local cell value at a signed offset from the center.
    pub fn local(&self, dx: i32, dy: i32) -> Cell {
        self.cells[local_index(dx, dy)]
    }

    /// Offsets of the occupied local cells.
    fn occupied_offsets(&self) -> ArrayVec<(i32, i32), SHAPE_CELLS> {
        let mut out = ArrayVec::new();
        for dx in -PIECE_HALF..=PIECE_HALF {
            for dy in -PIECE_HALF..=PIECE_HALF {
                if self.cells[local_index(dx, dy)] != EMPTY_CELL {
                    out.push((dx, dy));
                }
            }
        }
        out
    }

    /// Whether the piece, displaced by (dx, dy), fits on the board.
    ///
    /// Every occupied cell must stay above the floor, inside the left/right
    /// walls, and over an empty board cell. There is no ceiling check: cells
    /// at or above the top of the grid are fine (spawn headroom).
    pub fn can_move(&self, board: &Board, dx: i32, dy: i32) -> bool {
        self.occupied_offsets().iter().all(|&(ox, oy)| {
            let wx = self.x + ox + dx;
            let wy = self.y + oy + dy;

            if wy < 0 {
                return false; // floor
            }
            if wx < 0 || wx >= BOARD_WIDTH {
                return false; // walls
            }
            if wy >= BOARD_HEIGHT {
                return true; // headroom above the grid
            }
            !board.occupied(wx, wy)
        })
    }

    /// Move one column left if nothing blocks it; otherwise a silent no-op.
    pub fn try_left(&mut self, board: &Board) {
        if self.can_move(board, -1, 0) {
            self.x -= 1;
        }
    }

    /// Move one column right if nothing blocks it; otherwise a silent no-op.
    pub fn try_right(&mut self, board: &Board) {
        if self.can_move(board, 1, 0) {
            self.x += 1;
        }
    }

    /// Fall one row. Returns false when the piece cannot fall further,
    /// signalling that it has landed.
    pub fn try_drop(&mut self, board: &Board) -> bool {
        if self.can_move(board, 0, -1) {
            self.y -= 1;
            return true;
        }
        false
    }

    /// Rotate 90 degrees about the center cell, rolling back if the rotated
    /// shape collides at the current world position. The Square never
    /// rotates.
    pub fn try_rotate(&mut self, board: &Board) {
        if !self.kind.is_rotatable() {
            return;
        }

        self.scratch = self.cells;

        let mut rotated = [EMPTY_CELL; LOCAL_SIZE];
        for x in -PIECE_HALF..=PIECE_HALF {
            for y in -PIECE_HALF..=PIECE_HALF {
                rotated[local_index(-y, x)] = self.scratch[local_index(x, y)];
            }
        }
        self.cells = rotated;

        if !self.can_move(board, 0, 0) {
            self.cells = self.scratch;
        }
    }

    /// Copy the piece's occupied cells into the board.
    ///
    /// Only valid at positions reached through successful [`Piece::can_move`]
    /// checks, which keep every occupied cell in bounds; the `Result` carries
    /// the checked-write contract outward rather than panicking.
    pub fn insert_into(&self, board: &mut Board) -> Result<(), BoardError> {
        for (ox, oy) in self.occupied_offsets() {
            let id = self.cells[local_index(ox, oy)];
            board.set(self.x + ox, self.y + oy, id)?;
        }
        Ok(())
    }

    /// Raw local grid, for rollback assertions in tests.
    #[cfg(test)]
    pub fn local_cells(&self) -> &[Cell; LOCAL_SIZE] {
        &self.cells
    }
}
