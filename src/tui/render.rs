//! # Renderer
//!
//! Turns a [`Minefield`] snapshot into the lines shown on screen. Nothing in
//! here mutates the field; the only side effect is [`render`] handing the
//! finished frame to a [`Surface`].
//!
//! ```text
//! ┌───────┐
//! │ ? ? ? │   each cell: SGR fg, SGR bg, symbol, reset
//! │ ? 1 - │
//! │ ? ? ? │
//! └───────┘
//!  Flags remaining: 2
//! ```

use std::fmt;
use std::io;

use crate::core::cell::CellState;
use crate::core::error::Result;
use crate::core::minefield::{Coord, GameState, Minefield};

const RESET: &str = "\x1b[0m";

/// The sixteen standard terminal colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// SGR parameter selecting this color as foreground.
    pub const fn fg_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
        }
    }

    /// SGR parameter selecting this color as background.
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    /// Wraps `text` in this style. The reset sequence is always appended.
    pub fn paint(self, text: impl fmt::Display) -> String {
        let mut out = String::new();
        if let Some(fg) = self.fg {
            out.push_str(&format!("\x1b[{}m", fg.fg_code()));
        }
        if let Some(bg) = self.bg {
            out.push_str(&format!("\x1b[{}m", bg.bg_code()));
        }
        out.push_str(&text.to_string());
        out.push_str(RESET);
        out
    }
}

/// Color choices for the board, passed to every render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub flagged: Color,
    /// Foregrounds for one through eight adjacent mines.
    pub warn: [Color; 8],
    pub exploded: Color,
    pub cursor_fg: Color,
    pub cursor_bg: Color,
    /// Background of every cell once the game is won.
    pub won_bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            flagged: Color::BrightGreen,
            warn: [
                Color::BrightCyan,
                Color::Cyan,
                Color::BrightBlue,
                Color::BrightMagenta,
                Color::Magenta,
                Color::BrightYellow,
                Color::Red,
                Color::Red,
            ],
            exploded: Color::BrightRed,
            cursor_fg: Color::Black,
            cursor_bg: Color::BrightGreen,
            won_bg: Color::Red,
        }
    }
}

impl Palette {
    pub fn foreground(&self, state: CellState) -> Option<Color> {
        match state {
            CellState::Flagged => Some(self.flagged),
            CellState::Warn(level) => Some(self.warn[usize::from(level.count()) - 1]),
            CellState::Exploded => Some(self.exploded),
            CellState::Unknown | CellState::Safe => None,
        }
    }

    /// Style of the cell at `coord`. The in-progress cursor overrides the
    /// state color; a won board turns every background red.
    pub fn cell_style(&self, minefield: &Minefield, coord: Coord, state: CellState) -> Style {
        match minefield.status() {
            GameState::InProgress if minefield.cursor() == coord => Style {
                fg: Some(self.cursor_fg),
                bg: Some(self.cursor_bg),
            },
            GameState::Won => Style {
                fg: self.foreground(state),
                bg: Some(self.won_bg),
            },
            GameState::InProgress | GameState::Lost => Style {
                fg: self.foreground(state),
                bg: None,
            },
        }
    }
}

/// Where finished frames go: the terminal in the game, a buffer in tests.
pub trait Surface {
    fn draw(&mut self, frame: &str) -> io::Result<()>;
}

/// The styled symbol for one cell.
pub fn render_cell(minefield: &Minefield, x: usize, y: usize, palette: &Palette) -> Result<String> {
    let state = minefield.get_cell(x, y)?.state;
    let style = palette.cell_style(minefield, Coord::new(x, y), state);
    Ok(style.paint(state))
}

/// The bordered board followed by a single status line.
pub fn gen_lines(minefield: &Minefield, palette: &Palette) -> Vec<String> {
    let width = minefield.width();
    let rule = "─".repeat(width * 2 + 1);

    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(width); minefield.height()];
    for (x, y, cell) in minefield.cells() {
        let style = palette.cell_style(minefield, Coord::new(x, y), cell.state);
        rows[y].push(style.paint(cell.state));
    }

    let mut lines = Vec::with_capacity(minefield.height() + 3);
    lines.push(format!("┌{}┐", rule));
    lines.extend(rows.iter().map(|row| format!("│ {} │", row.join(" "))));
    lines.push(format!("└{}┘", rule));
    lines.push(status_line(minefield));
    lines
}

fn status_line(minefield: &Minefield) -> String {
    match minefield.status() {
        GameState::InProgress => format!(" Flags remaining: {}", minefield.flags_remaining()),
        GameState::Lost => " Game lost".to_string(),
        GameState::Won => " Game won".to_string(),
    }
}

/// Joins [`gen_lines`] and draws the frame.
pub fn render(
    minefield: &Minefield,
    palette: &Palette,
    surface: &mut impl Surface,
) -> io::Result<()> {
    surface.draw(&gen_lines(minefield, palette).join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::WarnLevel;
    use crate::test_support::{RecordingSurface, fixed_field};

    const PLAIN_ROW: &str = "│ ?\x1b[0m ?\x1b[0m ?\x1b[0m │";

    #[test]
    fn test_style_codes() {
        assert_eq!(Style::default().paint('?'), "?\x1b[0m");
        let style = Style {
            fg: Some(Color::Black),
            bg: Some(Color::BrightGreen),
        };
        assert_eq!(style.paint('?'), "\x1b[30m\x1b[102m?\x1b[0m");
        assert_eq!(Color::Red.bg_code(), 41);
    }

    #[test]
    fn test_palette_foregrounds() {
        let palette = Palette::default();
        assert_eq!(palette.foreground(CellState::Flagged), Some(Color::BrightGreen));
        assert_eq!(palette.foreground(CellState::Warn(WarnLevel::One)), Some(Color::BrightCyan));
        assert_eq!(palette.foreground(CellState::Warn(WarnLevel::Two)), Some(Color::Cyan));
        assert_eq!(palette.foreground(CellState::Warn(WarnLevel::Three)), Some(Color::BrightBlue));
        assert_eq!(palette.foreground(CellState::Warn(WarnLevel::Four)), Some(Color::BrightMagenta));
        assert_eq!(palette.foreground(CellState::Warn(WarnLevel::Five)), Some(Color::Magenta));
        assert_eq!(palette.foreground(CellState::Warn(WarnLevel::Six)), Some(Color::BrightYellow));
        assert_eq!(palette.foreground(CellState::Warn(WarnLevel::Seven)), Some(Color::Red));
        assert_eq!(palette.foreground(CellState::Warn(WarnLevel::Eight)), Some(Color::Red));
        assert_eq!(palette.foreground(CellState::Exploded), Some(Color::BrightRed));
        assert_eq!(palette.foreground(CellState::Unknown), None);
        assert_eq!(palette.foreground(CellState::Safe), None);
    }

    #[test]
    fn test_render_cell_plain() {
        let mut minefield = Minefield::new(35, 20, 15).unwrap();
        minefield.set_cursor(1, 0).unwrap();
        let cell = render_cell(&minefield, 0, 0, &Palette::default()).unwrap();
        assert_eq!(cell, "?\x1b[0m");
    }

    #[test]
    fn test_render_cell_under_cursor() {
        let mut minefield = fixed_field(3, 3, &[(2, 2)]);
        minefield.flag_cell(0, 0).unwrap();
        let cell = render_cell(&minefield, 0, 0, &Palette::default()).unwrap();
        assert_eq!(cell, "\x1b[30m\x1b[102mF\x1b[0m");
    }

    #[test]
    fn test_render_cell_warning_color() {
        let mut minefield = fixed_field(3, 3, &[(2, 2)]);
        minefield.reveal_cell(1, 1).unwrap();
        let cell = render_cell(&minefield, 1, 1, &Palette::default()).unwrap();
        assert_eq!(cell, "\x1b[96m1\x1b[0m");
    }

    #[test]
    fn test_render_cell_won_board() {
        let mut minefield = fixed_field(2, 1, &[(1, 0)]);
        minefield.flag_cell(1, 0).unwrap();
        minefield.reveal_cell(0, 0).unwrap();
        assert_eq!(minefield.status(), GameState::Won);

        let palette = Palette::default();
        assert_eq!(
            render_cell(&minefield, 1, 0, &palette).unwrap(),
            "\x1b[92m\x1b[41mF\x1b[0m"
        );
        // Cursor highlight is gone once the game is over
        assert_eq!(
            render_cell(&minefield, 0, 0, &palette).unwrap(),
            "\x1b[96m\x1b[41m1\x1b[0m"
        );
    }

    #[test]
    fn test_render_cell_out_of_bounds() {
        let minefield = fixed_field(3, 3, &[]);
        assert!(render_cell(&minefield, 3, 0, &Palette::default()).is_err());
    }

    #[test]
    fn test_gen_lines_fresh_board() {
        let minefield = Minefield::new(2, 3, 3).unwrap();
        let expected = [
            "┌───────┐",
            "│ \x1b[30m\x1b[102m?\x1b[0m ?\x1b[0m ?\x1b[0m │",
            PLAIN_ROW,
            PLAIN_ROW,
            "└───────┘",
            " Flags remaining: 2",
        ]
        .join("\n");
        assert_eq!(gen_lines(&minefield, &Palette::default()).join("\n"), expected);
    }

    #[test]
    fn test_gen_lines_cursor_elsewhere() {
        let mut minefield = Minefield::new(2, 3, 3).unwrap();
        minefield.set_cursor(1, 0).unwrap();
        let lines = gen_lines(&minefield, &Palette::default());
        assert_eq!(lines[1], "│ ?\x1b[0m \x1b[30m\x1b[102m?\x1b[0m ?\x1b[0m │");
    }

    #[test]
    fn test_gen_lines_lost_game() {
        let mut minefield = fixed_field(3, 3, &[(0, 0), (1, 0)]);
        minefield.reveal_cell(0, 0).unwrap();
        let expected = [
            "┌───────┐",
            "│ \x1b[91mX\x1b[0m ?\x1b[0m ?\x1b[0m │",
            PLAIN_ROW,
            PLAIN_ROW,
            "└───────┘",
            " Game lost",
        ]
        .join("\n");
        assert_eq!(gen_lines(&minefield, &Palette::default()).join("\n"), expected);
    }

    #[test]
    fn test_gen_lines_won_game() {
        let mut minefield = fixed_field(2, 1, &[(1, 0)]);
        minefield.reveal_cell(0, 0).unwrap();
        let lines = gen_lines(&minefield, &Palette::default());
        assert_eq!(
            lines,
            vec![
                "┌─────┐".to_string(),
                "│ \x1b[96m\x1b[41m1\x1b[0m \x1b[41m?\x1b[0m │".to_string(),
                "└─────┘".to_string(),
                " Game won".to_string(),
            ]
        );
    }

    #[test]
    fn test_gen_lines_negative_flags() {
        let mut minefield = fixed_field(2, 2, &[(0, 0)]);
        minefield.flag_cell(0, 0).unwrap();
        minefield.flag_cell(1, 1).unwrap();
        let lines = gen_lines(&minefield, &Palette::default());
        assert_eq!(lines.last().unwrap(), " Flags remaining: -1");
    }

    #[test]
    fn test_render_draws_joined_frame() {
        let minefield = Minefield::new(2, 3, 3).unwrap();
        let mut surface = RecordingSurface::default();
        render(&minefield, &Palette::default(), &mut surface).unwrap();

        assert_eq!(surface.frames.len(), 1);
        assert_eq!(
            surface.frames[0],
            gen_lines(&minefield, &Palette::default()).join("\n")
        );
    }
}
