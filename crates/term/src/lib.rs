//! Terminal rendering for the pairs game.
//!
//! A small game-oriented layer: `GameView` paints a snapshot into a
//! framebuffer, `TerminalRenderer` diffs and flushes it through crossterm.
//! The view also answers mouse hit tests so clicks map to tiles.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, BoardLayout, GameView, Hit, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
