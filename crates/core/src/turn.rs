//! Turn controller - the select / evaluate / resolve state machine.
//!
//! ```text
//!            select unmatched            select 2nd distinct unmatched
//!   Idle ──────────────────────▶ FirstSelected ─────────────────────────▶ Resolving
//!    ▲                               │                                      │
//!    │      select same tile         │                                      │
//!    ├───────────────────────────────┘                                      │
//!    │                        resolve (after RESOLVE_DELAY_MS)              │
//!    └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller owns the turn state and the session counters and mutates
//! tile visibility. It never sleeps: entering `Resolving` returns
//! [`SelectOutcome::PairRevealed`] and the caller schedules the call to
//! [`TurnController::resolve`]. Turns are charged the moment the second tile
//! is revealed; matches are credited only on resolution.

use crate::tile::Tile;
use crate::types::{TileId, Visibility, Warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnState {
    /// No tile selected.
    #[default]
    Idle,
    /// One tile face up, waiting for its partner.
    FirstSelected(TileId),
    /// Two tiles face up, outcome pending until the resolution delay ends.
    Resolving { pair: [TileId; 2], matched: bool },
}

impl TurnState {
    pub fn is_resolving(&self) -> bool {
        matches!(self, TurnState::Resolving { .. })
    }
}

/// Per-game counters. Both only ever grow in steps of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionCounters {
    /// Tiles matched so far.
    pub matches: u32,
    /// Two per evaluated pair.
    pub turns: u32,
}

/// Result of one select event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The id is not on the board.
    Ignored,
    /// Misuse; nothing changed.
    Rejected(Warning),
    /// The first tile was selected again and turned back down.
    Deselected,
    /// First tile of a turn is now face up.
    FirstRevealed(TileId),
    /// Second tile is face up and the turn has been charged.
    PairRevealed { pair: [TileId; 2], matched: bool },
}

impl SelectOutcome {
    pub fn warning(&self) -> Option<Warning> {
        match self {
            SelectOutcome::Rejected(w) => Some(*w),
            SelectOutcome::Deselected => Some(Warning::SameCard),
            _ => None,
        }
    }
}

/// What happened when a pending pair resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub pair: [TileId; 2],
    pub matched: bool,
    /// Every tile on the board is now matched.
    pub board_cleared: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TurnController {
    state: TurnState,
    counters: SessionCounters,
}

impl TurnController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn counters(&self) -> SessionCounters {
        self.counters
    }

    /// Back to a fresh game: idle, zero counters.
    pub fn reset(&mut self) {
        self.state = TurnState::Idle;
        self.counters = SessionCounters::default();
    }

    /// Handle a select event on `id`.
    pub fn select(&mut self, tiles: &mut [Tile], id: TileId) -> SelectOutcome {
        let first = match self.state {
            TurnState::Resolving { .. } => {
                tracing::debug!(tile = id.index(), "select dropped while resolving");
                return SelectOutcome::Rejected(Warning::Spamming);
            }
            TurnState::Idle => None,
            TurnState::FirstSelected(first) => Some(first),
        };

        let Some(tile) = tiles.get(id.index()) else {
            return SelectOutcome::Ignored;
        };
        if tile.is_matched() {
            return SelectOutcome::Rejected(Warning::MatchedCard);
        }

        match first {
            None => {
                tiles[id.index()].visibility = Visibility::Revealed;
                self.state = TurnState::FirstSelected(id);
                SelectOutcome::FirstRevealed(id)
            }
            Some(first) if first == id => {
                tiles[id.index()].visibility = Visibility::Hidden;
                self.state = TurnState::Idle;
                SelectOutcome::Deselected
            }
            Some(first) => {
                tiles[id.index()].visibility = Visibility::Revealed;
                let matched = tiles[first.index()].color == tiles[id.index()].color;
                let pair = [first, id];

                self.counters.turns += 2;
                self.state = TurnState::Resolving { pair, matched };
                tracing::debug!(
                    first = first.index(),
                    second = id.index(),
                    matched,
                    turns = self.counters.turns,
                    "pair revealed"
                );
                SelectOutcome::PairRevealed { pair, matched }
            }
        }
    }

    /// Finish the pending pair: mark it matched or turn it back face down.
    ///
    /// Returns `None` when no pair is pending.
    pub fn resolve(&mut self, tiles: &mut [Tile]) -> Option<Resolution> {
        let TurnState::Resolving { pair, matched } = self.state else {
            return None;
        };

        let visibility = if matched {
            Visibility::Matched
        } else {
            Visibility::Hidden
        };
        for id in pair {
            if let Some(tile) = tiles.get_mut(id.index()) {
                tile.visibility = visibility;
            }
        }
        if matched {
            self.counters.matches += 2;
        }
        self.state = TurnState::Idle;

        let board_cleared = self.counters.matches as usize == tiles.len();
        Some(Resolution {
            pair,
            matched,
            board_cleared,
        })
    }
}
