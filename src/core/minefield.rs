//! # Minefield
//!
//! The game model: a `width x height` grid of [`Cell`]s, the set of mine
//! coordinates, the player's cursor, the flag budget and the game status.
//!
//! ```text
//!                 reveal mine
//!  InProgress ───────────────────▶ Lost
//!      │
//!      │ reveal last safe cell
//!      ▼
//!     Won
//! ```
//!
//! Both `Won` and `Lost` are absorbing: once reached, [`Minefield::reveal_cell`]
//! and [`Minefield::flag_cell`] report [`RevealOutcome::NoChange`] /
//! [`FlagOutcome::NoChange`] and leave the board untouched.

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::cell::{Cell, CellState};
use crate::core::error::{GameError, Result};

/// A grid position; `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        match self {
            Self::InProgress => false,
            Self::Won | Self::Lost => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed | Self::HitMine | Self::Won => true,
        }
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the up-to-8 in-bounds neighbors of a coordinate.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord,
    width: usize,
    height: usize,
    index: usize,
}

impl Iterator for NeighborIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = DISPLACEMENTS.get(self.index) {
            self.index += 1;
            let Some(x) = self.center.x.checked_add_signed(dx) else {
                continue;
            };
            let Some(y) = self.center.y.checked_add_signed(dy) else {
                continue;
            };
            if x < self.width && y < self.height {
                return Some(Coord { x, y });
            }
        }
        None
    }
}

#[derive(Clone, Debug)]
pub struct Minefield {
    width: usize,
    height: usize,
    /// Row-major: the cell at `(x, y)` lives at `y * width + x`.
    grid: Vec<Cell>,
    mines: BTreeSet<Coord>,
    cursor: Coord,
    flags_remaining: isize,
    uncovered: usize,
    status: GameState,
}

impl Minefield {
    /// Builds a field with `num_mines` mines placed uniformly at random.
    pub fn new(num_mines: usize, width: usize, height: usize) -> Result<Self> {
        Self::with_seed(num_mines, width, height, rand::random())
    }

    /// Same as [`Minefield::new`], but reproducible for a given `seed`.
    pub fn with_seed(num_mines: usize, width: usize, height: usize, seed: u64) -> Result<Self> {
        validate(num_mines, width, height)?;

        let mut rng = StdRng::seed_from_u64(seed);
        let mines = place_mines(&mut rng, num_mines, width, height);
        debug!(
            "Placed {} mines on a {}x{} field (seed {})",
            num_mines, width, height, seed
        );

        Self::build(width, height, mines)
    }

    /// Builds a field with exactly the given mine layout.
    pub fn with_mines(
        width: usize,
        height: usize,
        mines: impl IntoIterator<Item = Coord>,
    ) -> Result<Self> {
        let mines: BTreeSet<Coord> = mines.into_iter().collect();
        validate(mines.len(), width, height)?;

        if let Some(outside) = mines.iter().find(|c| c.x >= width || c.y >= height) {
            return Err(GameError::configuration(format!(
                "mine at ({}, {}) lies outside the {}x{} field",
                outside.x, outside.y, width, height
            )));
        }

        Self::build(width, height, mines)
    }

    fn build(width: usize, height: usize, mines: BTreeSet<Coord>) -> Result<Self> {
        let grid = (0..height)
            .flat_map(|y| (0..width).map(move |x| Coord { x, y }))
            .map(|coord| Cell::new(mines.contains(&coord)))
            .collect();

        Ok(Self {
            width,
            height,
            grid,
            flags_remaining: mines.len() as isize,
            mines,
            cursor: Coord::default(),
            uncovered: 0,
            status: GameState::InProgress,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_mines(&self) -> usize {
        self.mines.len()
    }

    pub fn mine_coordinates(&self) -> &BTreeSet<Coord> {
        &self.mines
    }

    pub fn status(&self) -> GameState {
        self.status
    }

    /// Mines minus flags placed. Goes negative when the player over-flags.
    pub fn flags_remaining(&self) -> isize {
        self.flags_remaining
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn set_cursor(&mut self, x: usize, y: usize) -> Result<()> {
        self.cursor = self.validate(x, y)?;
        Ok(())
    }

    /// Moves the cursor by `(dx, dy)`, clamped to the field edges.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let x = self.cursor.x.saturating_add_signed(dx).min(self.width - 1);
        let y = self.cursor.y.saturating_add_signed(dy).min(self.height - 1);
        self.cursor = Coord { x, y };
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<&Cell> {
        let coord = self.validate(x, y)?;
        Ok(&self.grid[self.index(coord)])
    }

    pub fn adjacent_mine_count(&self, x: usize, y: usize) -> Result<u8> {
        let coord = self.validate(x, y)?;
        Ok(self.count_adjacent(coord))
    }

    /// Every `(x, y, cell)` in row-major order. Each call starts from `(0, 0)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .map(|(i, cell)| (i % self.width, i / self.width, cell))
    }

    pub fn neighbors(&self, coord: Coord) -> NeighborIter {
        NeighborIter {
            center: coord,
            width: self.width,
            height: self.height,
            index: 0,
        }
    }

    /// Toggles a flag on an unrevealed cell.
    pub fn flag_cell(&mut self, x: usize, y: usize) -> Result<FlagOutcome> {
        let coord = self.validate(x, y)?;
        if self.status.is_finished() {
            return Ok(FlagOutcome::NoChange);
        }

        let index = self.index(coord);
        let cell = &mut self.grid[index];
        if cell.state.is_revealed() {
            return Ok(FlagOutcome::NoChange);
        }

        if cell.state == CellState::Flagged {
            cell.state = CellState::Unknown;
            self.flags_remaining += 1;
        } else {
            cell.state = CellState::Flagged;
            self.flags_remaining -= 1;
        }
        Ok(FlagOutcome::Changed)
    }

    /// Reveals a cell, cascading through connected zero-count cells.
    pub fn reveal_cell(&mut self, x: usize, y: usize) -> Result<RevealOutcome> {
        let coord = self.validate(x, y)?;
        if self.status.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        let index = self.index(coord);
        let state = self.grid[index].state;
        if state.is_revealed() || state == CellState::Flagged {
            return Ok(RevealOutcome::NoChange);
        }

        if self.grid[index].is_mine() {
            self.grid[index].state = CellState::Exploded;
            self.status = GameState::Lost;
            info!("Mine hit at ({}, {}), game lost", x, y);
            return Ok(RevealOutcome::HitMine);
        }

        self.flood_reveal(coord);
        if self.uncovered == self.safe_cell_count() {
            self.status = GameState::Won;
            info!("Last safe cell uncovered at ({}, {}), game won", x, y);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Work-list flood fill from a safe cell. A cell is only processed while
    /// it is still `Unknown`, so every cell is revealed at most once.
    fn flood_reveal(&mut self, start: Coord) {
        let mut to_visit = vec![start];

        while let Some(coord) = to_visit.pop() {
            let index = self.index(coord);
            if self.grid[index].state != CellState::Unknown || self.grid[index].is_mine() {
                continue;
            }

            let count = self.count_adjacent(coord);
            let Some(state) = CellState::from_adjacent(count) else {
                unreachable!("{} mines next to {:?}", count, coord);
            };
            self.grid[index].state = state;
            self.uncovered += 1;

            if count == 0 {
                to_visit.extend(
                    self.neighbors(coord)
                        .filter(|&pos| self.grid[self.index(pos)].state == CellState::Unknown),
                );
            }
        }
    }

    fn count_adjacent(&self, coord: Coord) -> u8 {
        self.neighbors(coord)
            .filter(|pos| self.mines.contains(pos))
            .count() as u8
    }

    fn safe_cell_count(&self) -> usize {
        self.grid.len() - self.mines.len()
    }

    fn index(&self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }

    fn validate(&self, x: usize, y: usize) -> Result<Coord> {
        if x < self.width && y < self.height {
            Ok(Coord { x, y })
        } else {
            Err(GameError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minefield({}, {})", self.height, self.width)
    }
}

fn validate(num_mines: usize, width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GameError::configuration(format!(
            "field must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    let total = width.saturating_mul(height);
    if num_mines >= total {
        return Err(GameError::configuration(format!(
            "{} mines leave no safe cell on a {}x{} field",
            num_mines, width, height
        )));
    }
    Ok(())
}

/// Picks `num_mines` distinct cells, every subset equally likely.
fn place_mines(
    rng: &mut impl Rng,
    num_mines: usize,
    width: usize,
    height: usize,
) -> BTreeSet<Coord> {
    rand::seq::index::sample(rng, width * height, num_mines)
        .into_iter()
        .map(|i| Coord {
            x: i % width,
            y: i / width,
        })
        .collect()
}
