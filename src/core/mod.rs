//! # Core Game Logic
//!
//! This module contains the Minesweeper rules.
//! It knows nothing about terminals, colors or key codes.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Minefield (model)    │
//!                    │  • Action (input)       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │(crossterm) │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cell`]: `Cell` and its display state
//! - [`minefield`]: the grid, reveal/flag state machine and win/loss detection
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`difficulty`]: presets and `mines,width,height` parsing
//! - [`config`]: `~/.terminal-mines/config.toml` loading and resolution

pub mod action;
pub mod cell;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod minefield;

pub use cell::{Cell, CellState, WarnLevel};
pub use difficulty::Difficulty;
pub use error::GameError;
pub use minefield::{Coord, GameState, Minefield};
