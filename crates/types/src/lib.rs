//! Core types shared across the application.
//!
//! Pure data types and compile-time constants; no I/O, no game rules.

use thiserror::Error;

/// Board dimensions. The playfield is taller than the visible stack so a
/// freshly spawned piece has headroom above the spawn row.
pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 30;

/// Logical simulation rate (ticks per second).
pub const TICK_RATE: u64 = 64;

/// Gravity period at the start of a game (ticks per automatic one-row drop).
pub const START_GRAVITY_PERIOD: u32 = 24;
/// Hard floor for the gravity period; speed-ups clamp here.
pub const MIN_GRAVITY_PERIOD: u32 = 4;
/// Every this many level-ups, the gravity period shrinks by one tick.
pub const LEVELS_PER_SPEEDUP: u32 = 5;

/// Spawn position for a new piece (board coordinates, row 0 = bottom).
pub const SPAWN_X: i32 = BOARD_WIDTH / 2;
pub const SPAWN_Y: i32 = 24;

/// How long the Fail screen stays up before returning to the menu.
pub const FAIL_DELAY_TICKS: u64 = 4 * TICK_RATE;

/// Side length of a piece's local occupancy grid. Odd, so a single center
/// cell exists for rotation.
pub const PIECE_GRID: i32 = 5;
pub const PIECE_HALF: i32 = PIECE_GRID / 2;

/// Board cell value: 0 = empty, 1..=7 = one color id per piece kind.
pub type Cell = u8;

pub const EMPTY_CELL: Cell = 0;
/// Reserved decoration id used by the renderer for the playfield border.
/// Never stored in the board itself.
pub const BORDER_CELL: Cell = 8;

/// Error raised by checked board cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board cell ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },
}

/// The seven piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    L,
    J,
    Square,
    S,
    Z,
    Long,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Square,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::Long,
    ];

    /// The non-zero color id written into board cells for this kind.
    pub fn cell_id(self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::Square => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
            PieceKind::Long => 7,
        }
    }

    /// The Square occupies a 2x2 block around the center and looks the same
    /// in every orientation, so rotating it is a no-op.
    pub fn is_rotatable(self) -> bool {
        !matches!(self, PieceKind::Square)
    }
}

/// Top-level session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Play,
    Fail,
}

/// Player actions during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
}

/// Cursor movement inside the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuNav {
    Up,
    Down,
    Select,
}

/// What a confirmed menu entry asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ids_are_distinct_and_nonzero() {
        let mut seen = [false; 9];
        for kind in PieceKind::ALL {
            let id = kind.cell_id();
            assert_ne!(id, EMPTY_CELL);
            assert_ne!(id, BORDER_CELL);
            assert!(!seen[id as usize], "duplicate cell id {id}");
            seen[id as usize] = true;
        }
    }

    #[test]
    fn only_the_square_is_rotation_invariant() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.is_rotatable(), kind != PieceKind::Square);
        }
    }

    #[test]
    fn out_of_bounds_error_reports_coordinates() {
        let err = BoardError::OutOfBounds { x: -1, y: 30 };
        assert_eq!(err.to_string(), "board cell (-1, 30) is out of bounds");
    }
}
