use crate::session::SessionPhase;
use crate::tile::Tile;
use crate::turn::TurnState;
use crate::types::{Color, Visibility};

/// A tile as the player sees it. Face-down tiles carry no color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub shown: Option<Color>,
    pub visibility: Visibility,
}

impl From<Tile> for TileSnapshot {
    fn from(value: Tile) -> Self {
        Self {
            shown: value.shown_color(),
            visibility: value.visibility,
        }
    }
}

/// Read-only view of a session, consumed by renderers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub tiles: Vec<TileSnapshot>,
    pub phase: SessionPhase,
    pub turn: TurnState,
    pub matches: u32,
    pub turns: u32,
    pub best: Option<u32>,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Whether a select event could change the board right now.
    pub fn playable(&self) -> bool {
        self.phase == SessionPhase::Playing && !self.turn.is_resolving()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            phase: SessionPhase::NotStarted,
            turn: TurnState::Idle,
            matches: 0,
            turns: 0,
            best: None,
            episode_id: 0,
        }
    }
}
