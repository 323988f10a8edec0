//! # Actions
//!
//! Everything the player can do becomes an `Action`.
//! `a` pressed? That's `Action::MoveLeft`. Enter? `Action::Reveal`.
//!
//! The `update()` function applies one action to the minefield and returns
//! an `Effect` telling the caller whether the session should keep going.
//! No rendering and no terminal I/O happen here.
//!
//! ```text
//! Minefield + Action  →  update()  →  Effect
//! ```

use log::{debug, info};

use crate::core::error::Result;
use crate::core::minefield::{GameState, Minefield};

/// Default symbol for toggling a flag.
pub const DEFAULT_FLAG_KEY: char = 'e';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Flag,
    Reveal,
}

/// Maps decoded key symbols to actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    pub flag: char,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            flag: DEFAULT_FLAG_KEY,
        }
    }
}

impl KeyMap {
    /// Unrecognized symbols map to `None`.
    pub fn action_for(&self, symbol: char) -> Option<Action> {
        match symbol {
            'a' => Some(Action::MoveLeft),
            'd' => Some(Action::MoveRight),
            'w' => Some(Action::MoveUp),
            's' => Some(Action::MoveDown),
            '\n' => Some(Action::Reveal),
            c if c == self.flag => Some(Action::Flag),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Keep reading keys.
    Continue,
    /// The game reached `Won` or `Lost`; stop dispatching keys.
    GameOver(GameState),
}

/// Applies one action at the cursor.
pub fn update(minefield: &mut Minefield, action: Action) -> Result<Effect> {
    let cursor = minefield.cursor();
    match action {
        Action::MoveLeft => minefield.move_cursor(-1, 0),
        Action::MoveRight => minefield.move_cursor(1, 0),
        Action::MoveUp => minefield.move_cursor(0, -1),
        Action::MoveDown => minefield.move_cursor(0, 1),
        Action::Flag => {
            let outcome = minefield.flag_cell(cursor.x, cursor.y)?;
            if !outcome.has_update() {
                debug!("Flag at ({}, {}) ignored", cursor.x, cursor.y);
            }
        }
        Action::Reveal => {
            let outcome = minefield.reveal_cell(cursor.x, cursor.y)?;
            if outcome.has_update() {
                info!("Reveal at ({}, {}): {:?}", cursor.x, cursor.y, outcome);
            } else {
                debug!("Reveal at ({}, {}) ignored", cursor.x, cursor.y);
            }
        }
    }
    debug!("{:?} -> cursor {:?}", action, minefield.cursor());

    Ok(match minefield.status() {
        GameState::InProgress => Effect::Continue,
        finished @ (GameState::Won | GameState::Lost) => Effect::GameOver(finished),
    })
}
