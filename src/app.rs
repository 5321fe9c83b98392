//! App: routes input actions and mouse hits into a [`GameSession`].
//!
//! Holds the session, its HUD text and the keyboard cursor. The binary only
//! translates terminal events and renders; everything it does to the game
//! goes through here.

use crate::core::{
    DeckError, GameSession, HudText, Resolution, ScoreStore, SelectOutcome, SessionPhase,
};
use crate::input::GridCursor;
use crate::term::Hit;
use crate::types::{Color, GameAction, BOARD_COLUMNS, PALETTE};

pub struct App<S> {
    session: GameSession<S, HudText>,
    cursor: GridCursor,
}

impl<S: ScoreStore> App<S> {
    /// A game over the full twelve-color palette.
    pub fn new(seed: u32, store: S) -> Result<Self, DeckError> {
        Self::with_palette(&PALETTE, seed, store)
    }

    pub fn with_palette(colors: &[Color], seed: u32, store: S) -> Result<Self, DeckError> {
        let session = GameSession::new(colors, seed, store, HudText::default())?;
        Ok(Self {
            session,
            cursor: GridCursor::new(BOARD_COLUMNS as usize, 0),
        })
    }

    pub fn session(&self) -> &GameSession<S, HudText> {
        &self.session
    }

    pub fn hud(&self) -> &HudText {
        self.session.sink()
    }

    pub fn cursor(&self) -> &GridCursor {
        &self.cursor
    }

    /// Apply one input action. Returns the select outcome when a tile was selected.
    pub fn apply(&mut self, action: GameAction) -> Option<SelectOutcome> {
        match action {
            GameAction::CursorLeft
            | GameAction::CursorRight
            | GameAction::CursorUp
            | GameAction::CursorDown => {
                self.cursor.apply(action);
                None
            }
            GameAction::Select if self.session.phase() == SessionPhase::NotStarted => {
                self.start();
                None
            }
            GameAction::Select => {
                let id = self.cursor.tile()?;
                Some(self.session.select(id))
            }
            GameAction::Start => {
                self.start();
                None
            }
            GameAction::PlayAgain => {
                self.play_again();
                None
            }
        }
    }

    /// Handle a click resolved by the view's hit test.
    pub fn click(&mut self, hit: Hit) -> Option<SelectOutcome> {
        match hit {
            Hit::Tile(id) => {
                if !self.cursor.jump_to(id.index()) {
                    return None;
                }
                Some(self.session.select(id))
            }
            Hit::Control => {
                self.play_again();
                None
            }
        }
    }

    /// Advance game time by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) -> Vec<Resolution> {
        self.session.tick(elapsed_ms)
    }

    fn start(&mut self) {
        if self.session.start() {
            self.cursor.set_len(self.session.tiles().len());
        }
    }

    /// The control acts as "start game" until the first deal.
    fn play_again(&mut self) {
        if self.session.phase() == SessionPhase::NotStarted {
            self.start();
        } else {
            self.session.reset();
            self.cursor.set_len(self.session.tiles().len());
        }
    }
}
