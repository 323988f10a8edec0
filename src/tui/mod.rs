//! # TUI Adapter
//!
//! The crossterm-specific layer. Puts the terminal into raw mode, decodes key
//! presses into symbols, feeds them to the [`KeyHandler`] and writes the
//! rendered frames back out.
//!
//! The loop is single-threaded and blocking: one key is read, applied and
//! drawn before the next is read. It stops on a quit key or as soon as the
//! game is won or lost, leaving the final board on screen.

mod event;
mod key_handler;
pub mod render;

pub use event::{TuiEvent, translate_key};
pub use key_handler::KeyHandler;

use log::{info, warn};
use std::io::{self, Stdout, Write, stdout};
use thiserror::Error;

use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use crate::core::action::Effect;
use crate::core::config::ResolvedConfig;
use crate::core::error::GameError;
use crate::tui::render::{Palette, Surface};

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (raw mode, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Clears the screen and writes each frame from the top-left corner.
pub struct TerminalSurface {
    out: Stdout,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn draw(&mut self, frame: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        // Raw mode does not translate '\n' into a carriage return
        for line in frame.lines() {
            queue!(self.out, Print(line), MoveToNextLine(1))?;
        }
        self.out.flush()
    }
}

pub fn run(config: ResolvedConfig) -> Result<(), TuiError> {
    let minefield = config.difficulty.minefield(config.seed)?;
    info!(
        "New game: {} mines on {}x{}",
        minefield.num_mines(),
        minefield.width(),
        minefield.height()
    );

    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut handler = KeyHandler::new(
        minefield,
        TerminalSurface::new(),
        config.keys,
        Palette::default(),
    );
    handler.redraw()?;

    loop {
        match event::next_event()? {
            TuiEvent::Quit => {
                info!("Quit requested");
                break;
            }
            TuiEvent::Resize => handler.redraw()?,
            TuiEvent::Key(symbol) => match handler.handle_key(symbol) {
                Ok(Effect::Continue) => {}
                Ok(Effect::GameOver(status)) => {
                    info!("Session finished: {:?}", status);
                    break;
                }
                Err(TuiError::Game(e)) => {
                    warn!("Key {:?} rejected: {}", symbol, e);
                    return Err(e.into());
                }
                Err(e) => return Err(e),
            },
        }
    }

    Ok(())
}
