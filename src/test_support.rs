//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use crate::core::minefield::{Coord, Minefield};
use crate::tui::render::Surface;

/// A surface that keeps every frame it is asked to draw.
#[derive(Default)]
pub struct RecordingSurface {
    pub frames: Vec<String>,
}

impl Surface for RecordingSurface {
    fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }
}

/// Creates a minefield with mines at exactly the given `(x, y)` positions.
pub fn fixed_field(width: usize, height: usize, mines: &[(usize, usize)]) -> Minefield {
    Minefield::with_mines(width, height, mines.iter().copied().map(Coord::from))
        .expect("test layout should be valid")
}
