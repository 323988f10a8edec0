use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Refused construction: bad dimensions, bad mine count, or an
    /// unparseable difficulty string.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A coordinate outside `[0, width) x [0, height)`.
    #[error("coordinates ({x}, {y}) are outside the {width}x{height} minefield")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl GameError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
