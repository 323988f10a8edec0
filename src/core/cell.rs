//! # Cell
//!
//! A single square of the minefield. Whether it holds a mine is fixed at
//! construction; what the player sees is tracked by [`CellState`].

use std::fmt;

/// How many mines touch a revealed safe cell, one through eight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WarnLevel {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl WarnLevel {
    /// `None` unless `count` is in `1..=8`.
    pub const fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            _ => None,
        }
    }

    pub const fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
        }
    }
}

/// Player-visible state of a cell.
///
/// `Unknown` and `Flagged` are the only states a cell can leave. Once a cell
/// is `Safe`, `Warn(_)` or `Exploded` it stays that way for the rest of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Unknown,
    Safe,
    Warn(WarnLevel),
    Flagged,
    Exploded,
}

impl CellState {
    /// State for a revealed safe cell with `count` adjacent mines. A cell has
    /// at most eight neighbors, so anything above that is `None`.
    pub const fn from_adjacent(count: u8) -> Option<Self> {
        match count {
            0 => Some(Self::Safe),
            n => match WarnLevel::from_count(n) {
                Some(level) => Some(Self::Warn(level)),
                None => None,
            },
        }
    }

    /// Single-character symbol drawn for this state.
    pub const fn symbol(self) -> char {
        match self {
            Self::Unknown => '?',
            Self::Safe => '-',
            Self::Warn(level) => level.symbol(),
            Self::Flagged => 'F',
            Self::Exploded => 'X',
        }
    }

    /// True once the cell can no longer be flagged or revealed.
    pub const fn is_revealed(self) -> bool {
        match self {
            Self::Unknown | Self::Flagged => false,
            Self::Safe | Self::Warn(_) | Self::Exploded => true,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Cell {
    is_mine: bool,
    pub state: CellState,
}

impl Cell {
    pub fn new(is_mine: bool) -> Self {
        Self {
            is_mine,
            state: CellState::Unknown,
        }
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.is_mine, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_unknown() {
        let cell = Cell::new(false);
        assert_eq!(cell.state, CellState::Unknown);
        assert!(!cell.is_mine());
    }

    #[test]
    fn test_debug_form() {
        assert_eq!(format!("{:?}", Cell::new(true)), "Cell(true, ?)");

        let mut cell = Cell::new(false);
        cell.state = CellState::Warn(WarnLevel::Three);
        assert_eq!(format!("{:?}", cell), "Cell(false, 3)");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(CellState::Unknown.symbol(), '?');
        assert_eq!(CellState::Safe.symbol(), '-');
        assert_eq!(CellState::Warn(WarnLevel::One).symbol(), '1');
        assert_eq!(CellState::Warn(WarnLevel::Eight).symbol(), '8');
        assert_eq!(CellState::Flagged.symbol(), 'F');
        assert_eq!(CellState::Exploded.symbol(), 'X');
    }

    #[test]
    fn test_from_adjacent() {
        assert_eq!(CellState::from_adjacent(0), Some(CellState::Safe));
        assert_eq!(
            CellState::from_adjacent(4),
            Some(CellState::Warn(WarnLevel::Four))
        );
        assert_eq!(CellState::from_adjacent(9), None);
    }

    #[test]
    fn test_warn_levels_cover_one_through_eight() {
        assert_eq!(WarnLevel::from_count(0), None);
        assert_eq!(WarnLevel::from_count(9), None);
        for count in 1..=8u8 {
            let level = WarnLevel::from_count(count).unwrap();
            assert_eq!(level.count(), count);
            assert_eq!(level.symbol(), char::from(b'0' + count));
        }
    }

    #[test]
    fn test_revealed_states() {
        assert!(!CellState::Unknown.is_revealed());
        assert!(!CellState::Flagged.is_revealed());
        assert!(CellState::Safe.is_revealed());
        assert!(CellState::Warn(WarnLevel::Two).is_revealed());
        assert!(CellState::Exploded.is_revealed());
    }
}
