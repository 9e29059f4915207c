//! Terminal blockfall runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer (no TUI
//! framework). The simulation advances by replaying whole ticks against a
//! wall-clock tick counter, so the loop itself does not need to run at any
//! particular rate.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Game, TickTimer};
use blockfall::input::{menu_nav, play_action, should_quit};
use blockfall::term::{FrameBuffer, GameView, MenuList, TerminalRenderer, Viewport};
use blockfall::types::{MenuAction, Phase, TICK_RATE};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(time_seed());
    let mut menu = MenuList::main_menu();
    let timer = TickTimer::new();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    // Poll at the tick period; the replay loop absorbs any jitter.
    let poll_timeout = Duration::from_micros(1_000_000 / TICK_RATE);

    loop {
        game.run_ticks(timer.elapsed_ticks())?;

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match game.phase() {
                        Phase::Menu => {
                            if let Some(nav) = menu_nav(key) {
                                match menu.nav(nav) {
                                    Some(MenuAction::StartGame) => {
                                        game.start(timer.elapsed_ticks());
                                    }
                                    Some(MenuAction::Quit) => return Ok(()),
                                    None => {}
                                }
                            }
                        }
                        Phase::Play => {
                            if let Some(action) = play_action(key) {
                                game.apply_action(action);
                            }
                        }
                        Phase::Fail => {
                            // The fail screen times out on its own.
                        }
                    }
                }
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, &menu, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}

/// Seed the piece sequence from the wall clock (whole seconds).
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
