//! Menu widget: a vertical list of labelled actions.
//!
//! Navigation clamps at both ends rather than wrapping. Confirming an entry
//! yields its [`MenuAction`]; the application decides what to do with it.

use blockfall_types::{MenuAction, MenuNav};

/// An entry label paired with what confirming it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

/// The main menu list with a movable cursor.
#[derive(Debug, Clone)]
pub struct MenuList {
    entries: &'static [MenuEntry],
    selected: usize,
}

const MAIN_MENU: &[MenuEntry] = &[
    MenuEntry {
        label: "Start Game",
        action: MenuAction::StartGame,
    },
    MenuEntry {
        label: "Quit",
        action: MenuAction::Quit,
    },
];

impl MenuList {
    pub fn main_menu() -> Self {
        Self {
            entries: MAIN_MENU,
            selected: 0,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply a navigation step. `Select` returns the confirmed action;
    /// cursor moves return `None`.
    pub fn nav(&mut self, nav: MenuNav) -> Option<MenuAction> {
        match nav {
            MenuNav::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                None
            }
            MenuNav::Down => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
                None
            }
            MenuNav::Select => Some(self.entries[self.selected].action),
        }
    }
}

impl Default for MenuList {
    fn default() -> Self {
        Self::main_menu()
    }
}
