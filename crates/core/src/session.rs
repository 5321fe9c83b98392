//! Game session - owns the board and wires select events to the turn controller.
//!
//! The session is the only owner of mutable game state. It deals decks,
//! forwards select events, schedules the resolution and warning-clear delays
//! on its [`Scheduler`], and reports counters to the display sink and the
//! final score to the score store.
//!
//! Time only moves through [`GameSession::tick`], so a whole game can be
//! replayed deterministically from a seed and a list of `(select, tick)` calls.

use crate::deck::{DeckError, Palette};
use crate::display::DisplaySink;
use crate::rng::SimpleRng;
use crate::score::{improves_on, ScoreStore};
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::tile::Tile;
use crate::timer::{Scheduler, TimerId};
use crate::turn::{Resolution, SelectOutcome, SessionCounters, TurnController, TurnState};
use crate::types::{Color, TileId, Warning, RESOLVE_DELAY_MS, WARNING_CLEAR_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// "Start game" has not been pressed; no tiles on the board.
    NotStarted,
    Playing,
    /// Every tile is matched.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerTask {
    /// Resolve the pending pair of the given deal.
    Resolve { episode: u32 },
    ClearWarning,
}

pub struct GameSession<S, D> {
    palette: Palette,
    rng: SimpleRng,
    tiles: Vec<Tile>,
    turn: TurnController,
    timers: Scheduler<TimerTask>,
    /// Resolve task of the pair currently face up.
    pending_resolve: Option<TimerId>,
    store: S,
    sink: D,
    best: Option<u32>,
    phase: SessionPhase,
    /// Increments on every deal.
    episode_id: u32,
}

impl<S: ScoreStore, D: DisplaySink> GameSession<S, D> {
    /// Create a session and show the stored best score. No deck is dealt until
    /// [`start`](Self::start).
    pub fn new(colors: &[Color], seed: u32, store: S, mut sink: D) -> Result<Self, DeckError> {
        let palette = Palette::new(colors)?;
        let best = store.get_best();
        sink.show_best(best);

        Ok(Self {
            palette,
            rng: SimpleRng::new(seed),
            tiles: Vec::new(),
            turn: TurnController::new(),
            timers: Scheduler::new(),
            pending_resolve: None,
            store,
            sink,
            best,
            phase: SessionPhase::NotStarted,
            episode_id: 0,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn counters(&self) -> SessionCounters {
        self.turn.counters()
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Deal the first deck. Returns false if the game was already started.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::NotStarted {
            return false;
        }
        self.deal();
        true
    }

    /// Play again: throw away the board and counters and deal a fresh deck.
    ///
    /// A pair still waiting for its resolution delay is cancelled along with
    /// the board it belonged to. The best score and any visible warning are
    /// left alone.
    pub fn reset(&mut self) {
        if let Some(id) = self.pending_resolve.take() {
            if self.timers.cancel(id) {
                tracing::debug!("pending resolution dropped by reset");
            }
        }
        self.deal();
    }

    fn deal(&mut self) {
        self.tiles = self.palette.deal(&mut self.rng).into_tiles();
        self.turn.reset();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = SessionPhase::Playing;

        self.sink.show_matches(0);
        self.sink.show_turns(0);
        tracing::info!(
            episode = self.episode_id,
            tiles = self.tiles.len(),
            "new game dealt"
        );
    }

    /// Feed a select event for tile `id`.
    pub fn select(&mut self, id: TileId) -> SelectOutcome {
        if self.phase == SessionPhase::NotStarted {
            return SelectOutcome::Ignored;
        }

        let outcome = self.turn.select(&mut self.tiles, id);
        if let Some(warning) = outcome.warning() {
            self.warn(warning);
        }
        if let SelectOutcome::PairRevealed { .. } = outcome {
            self.sink.show_turns(self.turn.counters().turns);
            let id = self.timers.schedule(
                RESOLVE_DELAY_MS,
                TimerTask::Resolve {
                    episode: self.episode_id,
                },
            );
            self.pending_resolve = Some(id);
        }
        outcome
    }

    /// Each warning gets its own clear timer. An older timer may wipe a newer
    /// message early.
    fn warn(&mut self, warning: Warning) {
        tracing::debug!(?warning, "input warning");
        self.sink.show_warning(warning.message(), WARNING_CLEAR_MS);
        self.timers.schedule(WARNING_CLEAR_MS, TimerTask::ClearWarning);
    }

    /// Advance the session clock, firing due tasks. Returns the pairs resolved.
    pub fn tick(&mut self, elapsed_ms: u32) -> Vec<Resolution> {
        let mut resolved = Vec::new();
        for task in self.timers.advance(elapsed_ms) {
            match task {
                TimerTask::Resolve { episode } if episode == self.episode_id => {
                    self.pending_resolve = None;
                    if let Some(resolution) = self.resolve() {
                        resolved.push(resolution);
                    }
                }
                TimerTask::Resolve { episode } => {
                    tracing::debug!(episode, "stale resolution skipped");
                }
                TimerTask::ClearWarning => self.sink.clear_warning(),
            }
        }
        resolved
    }

    fn resolve(&mut self) -> Option<Resolution> {
        let resolution = self.turn.resolve(&mut self.tiles)?;
        if resolution.matched {
            self.sink.show_matches(self.turn.counters().matches);
        }
        if resolution.board_cleared {
            self.finish();
        }
        Some(resolution)
    }

    fn finish(&mut self) {
        self.phase = SessionPhase::Finished;
        let turns = self.turn.counters().turns;
        tracing::info!(turns, best = ?self.best, "all pairs found");

        if improves_on(self.best, turns) {
            if !self.store.set_best(turns) {
                tracing::debug!(turns, "store kept its previous best; showing this run's best");
            }
            self.best = Some(turns);
            self.sink.show_best(self.best);
            tracing::info!(turns, "new best score");
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let counters = self.turn.counters();
        out.tiles.clear();
        out.tiles.extend(self.tiles.iter().copied().map(TileSnapshot::from));
        out.phase = self.phase;
        out.turn = self.turn.state();
        out.matches = counters.matches;
        out.turns = counters.turns;
        out.best = self.best;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
