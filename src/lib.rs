//! TUI Pairs (workspace facade crate).
//!
//! A terminal memory game: find every pair of colored tiles in as few guesses
//! as possible. The implementation lives in dedicated crates under `crates/`;
//! this package re-exports them and adds the pieces the binary needs
//! (configuration, logging, and the input-to-session [`app::App`]).

pub mod app;
pub mod config;
pub mod logging;

pub use tui_pairs_core as core;
pub use tui_pairs_input as input;
pub use tui_pairs_store as store;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;

pub use app::App;
pub use config::GameConfig;
