//! GameView: maps the game state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Game;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::menu::MenuList;
use crate::types::{
    Cell, Phase, BOARD_HEIGHT, BOARD_WIDTH, BORDER_CELL, EMPTY_CELL, PIECE_HALF,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the playfield and menu screens.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render whatever the current phase shows: the menu list in Menu, the
    /// playfield otherwise (Fail adds an overlay on top of the final board).
    pub fn render_into(&self, game: &Game, menu: &MenuList, viewport: Viewport, fb: &mut FrameBuffer) {
        match game.phase() {
            Phase::Menu => self.render_menu(menu, viewport, fb),
            Phase::Play | Phase::Fail => self.render_game(game, viewport, fb),
        }
    }

    /// Render the playfield, the active piece, and the score readout.
    ///
    /// Board row 0 is the bottom of the playfield, so board rows map to
    /// screen rows top-down in reverse.
    pub fn render_game(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2 * self.cell_w;
        let frame_h = board_px_h + 2 * self.cell_h;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Settled board cells.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if let Ok(cell) = game.board().get(x, y) {
                    if cell != EMPTY_CELL {
                        self.draw_board_cell(fb, start_x, start_y, x, y, cell);
                    }
                }
            }
        }

        // Active piece. Cells above the top of the grid are simply not drawn.
        if let Some(piece) = game.active() {
            for dy in -PIECE_HALF..=PIECE_HALF {
                for dx in -PIECE_HALF..=PIECE_HALF {
                    let cell = piece.local(dx, dy);
                    if cell == EMPTY_CELL {
                        continue;
                    }
                    let wx = piece.x() + dx;
                    let wy = piece.y() + dy;
                    if wy >= 0 && wy < BOARD_HEIGHT {
                        self.draw_board_cell(fb, start_x, start_y, wx, wy, cell);
                    }
                }
            }
        }

        // Score readout beside the frame.
        let label = CellStyle {
            bold: true,
            ..Default::default()
        };
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(10) < viewport.width {
            fb.put_str(panel_x, start_y + 1, "Score:", label);
            fb.put_u32(panel_x + 7, start_y + 1, game.level(), Default::default());
        }

        if game.phase() == Phase::Fail {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "You Are a Failure");
        }
    }

    /// Render the main menu with a cursor on the highlighted entry.
    pub fn render_menu(&self, menu: &MenuList, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let title = "B L O C K F A L L";
        let title_style = CellStyle {
            bold: true,
            ..Default::default()
        };
        let title_x = viewport.width.saturating_sub(title.chars().count() as u16) / 2;
        let base_y = viewport.height / 3;
        fb.put_str(title_x, base_y, title, title_style);

        for (i, entry) in menu.entries().iter().enumerate() {
            let y = base_y.saturating_add(2 + i as u16);
            let selected = i == menu.selected();
            let style = if selected {
                CellStyle {
                    fg: Rgb::new(255, 255, 0),
                    bold: true,
                    ..Default::default()
                }
            } else {
                CellStyle::default()
            };
            let x = viewport.width.saturating_sub(entry.label.chars().count() as u16) / 2;
            if selected {
                fb.put_str(x.saturating_sub(2), y, "> ", style);
            }
            fb.put_str(x, y, entry.label, style);
        }
    }

    /// Left, right, and bottom walls only; pieces enter through the open top.
    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: cell_color(BORDER_CELL),
            ..Default::default()
        };
        fb.fill_rect(x, y + h - self.cell_h, w, self.cell_h, '█', style);
        fb.fill_rect(x, y, self.cell_w, h, '█', style);
        fb.fill_rect(x + w - self.cell_w, y, self.cell_w, h, '█', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i32, y: i32, cell: Cell) {
        let style = CellStyle {
            fg: cell_color(cell),
            ..Default::default()
        };
        // Flip: board row 0 renders at the bottom of the frame.
        let px = start_x + self.cell_w + (x as u16) * self.cell_w;
        let py = start_y + self.cell_h + ((BOARD_HEIGHT - 1 - y) as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 0, 0),
            bold: true,
            ..Default::default()
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Color for a non-empty board cell id (1..=7) or the border id.
fn cell_color(cell: Cell) -> Rgb {
    match cell {
        1 => Rgb::new(255, 0, 0),
        2 => Rgb::new(0, 255, 0),
        3 => Rgb::new(0, 0, 255),
        4 => Rgb::new(255, 255, 0),
        5 => Rgb::new(255, 128, 0),
        6 => Rgb::new(0, 200, 255),
        7 => Rgb::new(200, 0, 255),
        BORDER_CELL => Rgb::new(200, 200, 200),
        _ => Rgb::new(255, 255, 255),
    }
}
