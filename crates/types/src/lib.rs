//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `RESOLVE_DELAY_MS` | 1000 | Wait before a revealed pair is matched or hidden again |
//! | `WARNING_CLEAR_MS` | 2000 | Time a warning stays on screen |
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{Color, GameAction, Visibility, PALETTE};
//!
//! assert_eq!(Color::from_str("Red"), Some(Color::Red));
//! assert_eq!(Color::Magenta.as_str(), "magenta");
//! assert_eq!(PALETTE.len(), 12);
//!
//! assert!(Visibility::Matched.is_face_up());
//! assert!(!Visibility::Hidden.is_face_up());
//!
//! assert_eq!(GameAction::from_str("playAgain"), Some(GameAction::PlayAgain));
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between revealing the second card and resolving the pair.
pub const RESOLVE_DELAY_MS: u32 = 1000;

/// Lifetime of a warning message before it is wiped.
pub const WARNING_CLEAR_MS: u32 = 2000;

/// Grid columns used by the terminal board.
pub const BOARD_COLUMNS: u16 = 6;

/// Storage key of the persisted best score.
pub const BEST_SCORE_KEY: &str = "lowestGuesses";

/// Card colors. Each color appears exactly twice in a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    Brown,
    Gray,
    Black,
    Cyan,
    Magenta,
}

/// The classic twelve-color palette (24 tiles).
pub const PALETTE: [Color; 12] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Orange,
    Color::Purple,
    Color::Pink,
    Color::Brown,
    Color::Gray,
    Color::Black,
    Color::Cyan,
    Color::Magenta,
];

impl Color {
    /// Parse a color name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "orange" => Some(Color::Orange),
            "purple" => Some(Color::Purple),
            "pink" => Some(Color::Pink),
            "brown" => Some(Color::Brown),
            "gray" | "grey" => Some(Color::Gray),
            "black" => Some(Color::Black),
            "cyan" => Some(Color::Cyan),
            "magenta" => Some(Color::Magenta),
            _ => None,
        }
    }

    /// Lowercase color name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Brown => "brown",
            Color::Gray => "gray",
            Color::Black => "black",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
        }
    }
}

/// Stable tile identity: the tile's position in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

impl TileId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What the player currently sees of a tile.
///
/// - **Hidden**: face down
/// - **Revealed**: face up while selected or awaiting resolution
/// - **Matched**: face up for the rest of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl Visibility {
    pub fn is_face_up(&self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}

/// Input misuse reported through the warning channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A tile was selected while a pair was still resolving.
    Spamming,
    /// The first tile of the turn was selected again.
    SameCard,
    /// A tile that was already matched was selected.
    MatchedCard,
}

impl Warning {
    /// Text shown in the warning region.
    pub fn message(&self) -> &'static str {
        match self {
            Warning::Spamming => "AVOID SPAMMING!",
            Warning::SameCard => "AVOID CLICKING THE SAME CARD!",
            Warning::MatchedCard => "AVOID CLICKING MATCHED CARDS!",
        }
    }
}

/// Player actions understood by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one column left
    CursorLeft,
    /// Move the board cursor one column right
    CursorRight,
    /// Move the board cursor one row up
    CursorUp,
    /// Move the board cursor one row down
    CursorDown,
    /// Select the tile under the cursor
    Select,
    /// Build and show the first deck
    Start,
    /// Throw the current board away and deal a new one
    PlayAgain,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("select"), Some(GameAction::Select));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "select" => Some(GameAction::Select),
            "start" => Some(GameAction::Start),
            "playagain" => Some(GameAction::PlayAgain),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::Select => "select",
            GameAction::Start => "start",
            GameAction::PlayAgain => "playAgain",
        }
    }
}
