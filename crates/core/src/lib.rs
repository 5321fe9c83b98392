//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game and the state machine
//! that drives a turn. It has **zero dependencies** on terminal I/O or
//! persistence, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Time is a number passed to [`GameSession::tick`], never a sleep
//! - **Portable**: Score storage and displays are traits supplied by the caller
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG and the Fisher-Yates shuffler
//! - [`deck`]: palette validation and pair deck dealing
//! - [`tile`]: a single card and its visibility
//! - [`turn`]: the select / evaluate / resolve state machine
//! - [`timer`]: one-shot deferred tasks on a millisecond clock
//! - [`score`]: best-score store contract
//! - [`display`]: display sink contract and in-memory sinks
//! - [`session`]: start / reset orchestration and timer wiring
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Every color appears on exactly two tiles
//! - A turn reveals two distinct tiles and costs two guesses immediately
//! - After 1000ms a matching pair stays face up, a mismatch turns back down
//! - Selecting during those 1000ms, reselecting the first tile, or selecting a
//!   matched tile only raises a warning (cleared after 2000ms)
//! - The lowest guess count of a completed game is the best score
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::{EventLog, GameSession, MemoryScoreStore, SessionPhase};
//! use tui_pairs_core::types::{Color, TileId, RESOLVE_DELAY_MS};
//!
//! let colors = [Color::Red, Color::Blue];
//! let mut game = GameSession::new(&colors, 7, MemoryScoreStore::new(), EventLog::new()).unwrap();
//! game.start();
//!
//! // Play the two pairs, whatever order they were dealt in.
//! for color in colors {
//!     let tiles = game.tiles().iter().filter(|t| t.color == color);
//!     let ids: Vec<TileId> = tiles.map(|t| t.id).collect();
//!     game.select(ids[0]);
//!     game.select(ids[1]);
//!     game.tick(RESOLVE_DELAY_MS);
//! }
//!
//! assert_eq!(game.phase(), SessionPhase::Finished);
//! assert_eq!(game.counters().turns, 4);
//! assert_eq!(game.best(), Some(4));
//! ```

pub mod deck;
pub mod display;
pub mod rng;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod tile;
pub mod timer;
pub mod turn;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use deck::{build_deck, DeckError, PairDeck, Palette};
pub use display::{DisplayEvent, DisplaySink, EventLog, HudText};
pub use rng::{shuffle, SimpleRng};
pub use score::{improves_on, MemoryScoreStore, ScoreStore};
pub use session::{GameSession, SessionPhase};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use tile::Tile;
pub use timer::{Scheduler, TimerId};
pub use turn::{Resolution, SelectOutcome, SessionCounters, TurnController, TurnState};
