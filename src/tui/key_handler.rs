use log::info;

use crate::core::action::{Effect, KeyMap, update};
use crate::core::minefield::Minefield;
use crate::tui::TuiError;
use crate::tui::render::{Palette, Surface, render};

/// Owns the game session: one minefield, the surface it is drawn on, and
/// the key bindings. Every handled key redraws the board.
pub struct KeyHandler<S: Surface> {
    minefield: Minefield,
    surface: S,
    keys: KeyMap,
    palette: Palette,
}

impl<S: Surface> KeyHandler<S> {
    pub fn new(minefield: Minefield, surface: S, keys: KeyMap, palette: Palette) -> Self {
        Self {
            minefield,
            surface,
            keys,
            palette,
        }
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Draws the current board without changing it.
    pub fn redraw(&mut self) -> Result<(), TuiError> {
        render(&self.minefield, &self.palette, &mut self.surface)?;
        Ok(())
    }

    /// Applies the action bound to `symbol`, if any, then redraws.
    pub fn handle_key(&mut self, symbol: char) -> Result<Effect, TuiError> {
        let effect = match self.keys.action_for(symbol) {
            Some(action) => update(&mut self.minefield, action)?,
            None => Effect::Continue,
        };
        self.redraw()?;

        if let Effect::GameOver(status) = effect {
            info!("Game over: {:?}", status);
        }
        Ok(effect)
    }
}
