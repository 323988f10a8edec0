//! # Difficulty
//!
//! A game size is either a named preset or an explicit `"mines,width,height"`
//! triple. Both forms go through [`Difficulty::from_str`], which is what the
//! CLI and the config file use.

use std::fmt;
use std::str::FromStr;

use crate::core::error::{GameError, Result};
use crate::core::minefield::Minefield;

/// Largest width or height accepted from user input.
pub const MAX_SIDE: usize = 30;

/// Named presets as `(name, mines, width, height)`.
pub const PRESETS: [(&str, usize, usize, usize); 5] = [
    ("easy", 10, 8, 8),
    ("balanced", 35, 20, 15),
    ("intermediate", 40, 16, 16),
    ("challenging", 70, 25, 20),
    ("expert", 99, 16, 30),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Difficulty {
    pub mines: usize,
    pub width: usize,
    pub height: usize,
}

impl Difficulty {
    pub fn new(mines: usize, width: usize, height: usize) -> Result<Self> {
        if !(1..=MAX_SIDE).contains(&width) || !(1..=MAX_SIDE).contains(&height) {
            return Err(GameError::configuration(format!(
                "width and height must be between 1 and {}, got {}x{}",
                MAX_SIDE, width, height
            )));
        }
        if mines > width * height {
            return Err(GameError::configuration(format!(
                "{} mines do not fit on a {}x{} field",
                mines, width, height
            )));
        }
        Ok(Self {
            mines,
            width,
            height,
        })
    }

    pub fn preset(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|(preset, ..)| preset.eq_ignore_ascii_case(name))
            .map(|&(_, mines, width, height)| Self {
                mines,
                width,
                height,
            })
    }

    pub fn as_tuple(self) -> (usize, usize, usize) {
        (self.mines, self.width, self.height)
    }

    /// A fresh, randomly mined field of this size.
    pub fn minefield(self, seed: Option<u64>) -> Result<Minefield> {
        match seed {
            Some(seed) => Minefield::with_seed(self.mines, self.width, self.height, seed),
            None => Minefield::new(self.mines, self.width, self.height),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            mines: 10,
            width: 8,
            height: 8,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.mines, self.width, self.height)
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(preset) = Self::preset(s) {
            return Ok(preset);
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [mines, width, height] = parts.as_slice() else {
            let names: Vec<&str> = PRESETS.iter().map(|(name, ..)| *name).collect();
            return Err(GameError::configuration(format!(
                "'{}' is neither a preset ({}) nor 'mines,width,height'",
                s,
                names.join(", ")
            )));
        };

        let number = |field: &str, value: &str| {
            value.parse::<usize>().map_err(|_| {
                GameError::configuration(format!(
                    "{} must be a non-negative integer, got '{}'",
                    field, value
                ))
            })
        };

        Self::new(
            number("mines", *mines)?,
            number("width", *width)?,
            number("height", *height)?,
        )
    }
}
