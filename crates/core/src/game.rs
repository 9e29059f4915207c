//! Game module - the Menu/Play/Fail state machine and tick replay.
//!
//! The game owns the board and the active piece and advances them one
//! logical tick at a time. [`Game::run_ticks`] takes the current elapsed-tick
//! count from an external monotonic source, computes the delta since the
//! last processed tick, and replays that many whole steps, so the simulation
//! is deterministic no matter how often the outer loop runs.
//!
//! One tick in Play does three things, in order: spawn a piece if none is
//! active (a blocked spawn cell ends the game), apply gravity to the active
//! piece (a failed drop commits it into the board), and clear at most one
//! completed line. Clearing a line and every fifth spawn both shave one tick
//! off the gravity period, down to a floor of four.

use blockfall_types::{
    BoardError, GameAction, Phase, FAIL_DELAY_TICKS, LEVELS_PER_SPEEDUP, MIN_GRAVITY_PERIOD,
    SPAWN_X, SPAWN_Y, START_GRAVITY_PERIOD,
};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: SimpleRng,
    phase: Phase,
    /// Monotonically increasing spawn counter; doubles as the score readout.
    level: u32,
    /// Ticks between automatic one-row drops. Never below the floor.
    gravity_period: u32,
    /// Ticks until the active piece's next automatic drop.
    fall_countdown: u32,
    /// Ticks left on the Fail screen before returning to the menu.
    fail_countdown: u64,
    /// Elapsed-tick count at the last processed tick.
    last_tick: u64,
    active: Option<Piece>,
}

impl Game {
    /// Create a session in the Menu phase.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            rng: SimpleRng::new(seed),
            phase: Phase::Menu,
            level: 0,
            gravity_period: START_GRAVITY_PERIOD,
            fall_countdown: 0,
            fail_countdown: 0,
            last_tick: 0,
            active: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn gravity_period(&self) -> u32 {
        self.gravity_period
    }

    /// Ticks remaining on the Fail screen (0 outside Fail).
    pub fn fail_ticks_remaining(&self) -> u64 {
        self.fail_countdown
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Direct board access, for scripted setups and tooling.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Begin a new game: clear the board, reset the speed curve, and
    /// resynchronize to the current elapsed-tick count so no backlog of
    /// menu-time ticks is replayed.
    pub fn start(&mut self, now_ticks: u64) {
        self.board.clear();
        self.phase = Phase::Play;
        self.level = 0;
        self.gravity_period = START_GRAVITY_PERIOD;
        self.fall_countdown = 0;
        self.active = None;
        self.last_tick = now_ticks;
    }

    /// Replay every whole tick between the last processed tick and
    /// `now_ticks`. Does nothing in the Menu phase.
    pub fn run_ticks(&mut self, now_ticks: u64) -> Result<(), BoardError> {
        if self.phase == Phase::Menu {
            return Ok(());
        }

        let pending = now_ticks.saturating_sub(self.last_tick);
        self.last_tick = now_ticks;

        for _ in 0..pending {
            self.step()?;
        }
        Ok(())
    }

    /// Advance the simulation by exactly one logical tick.
    fn step(&mut self) -> Result<(), BoardError> {
        match self.phase {
            Phase::Menu => {}
            Phase::Play => self.step_play()?,
            Phase::Fail => {
                self.fail_countdown = self.fail_countdown.saturating_sub(1);
                if self.fail_countdown == 0 {
                    self.phase = Phase::Menu;
                }
            }
        }
        Ok(())
    }

    fn step_play(&mut self) -> Result<(), BoardError> {
        if self.active.is_none() && !self.spawn_piece() {
            self.phase = Phase::Fail;
            self.fail_countdown = FAIL_DELAY_TICKS;
            return Ok(());
        }

        if self.fall_countdown == 0 {
            let landed = match self.active.as_mut() {
                Some(piece) => {
                    if piece.try_drop(&self.board) {
                        self.fall_countdown = self.gravity_period;
                        false
                    } else {
                        true
                    }
                }
                None => false,
            };
            if landed {
                if let Some(piece) = self.active.take() {
                    piece.insert_into(&mut self.board)?;
                }
            }
        } else {
            self.fall_countdown -= 1;
        }

        if self.board.try_clear_one_line() && self.gravity_period > MIN_GRAVITY_PERIOD {
            self.gravity_period -= 1;
        }

        Ok(())
    }

    /// Spawn the next piece at the fixed spawn cell. Returns false when the
    /// spawn cell is already occupied (the board has stacked up to spawn
    /// height), which is the game-over signal.
    fn spawn_piece(&mut self) -> bool {
        if self.board.occupied(SPAWN_X, SPAWN_Y) {
            return false;
        }

        self.fall_countdown = self.gravity_period;
        if self.level % LEVELS_PER_SPEEDUP == 0 && self.gravity_period > MIN_GRAVITY_PERIOD {
            self.gravity_period -= 1;
        }
        self.level += 1;

        self.active = Some(Piece::new(self.rng.next_kind(), SPAWN_X, SPAWN_Y));
        true
    }

    /// Apply a player action. Honored only during Play while a piece is
    /// active; blocked moves are silent no-ops. A successful soft drop resets
    /// the fall countdown so it does not stack with the next automatic drop.
    pub fn apply_action(&mut self, action: GameAction) {
        if self.phase != Phase::Play {
            return;
        }
        let Some(piece) = self.active.as_mut() else {
            return;
        };

        match action {
            GameAction::MoveLeft => piece.try_left(&self.board),
            GameAction::MoveRight => piece.try_right(&self.board),
            GameAction::Rotate => piece.try_rotate(&self.board),
            GameAction::SoftDrop => {
                if piece.try_drop(&self.board) {
                    self.fall_countdown = self.gravity_period;
                }
            }
        }
    }
}
