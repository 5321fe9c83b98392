//! Best-score persistence contract.
//!
//! The best score is the lowest `turns` value of any completed game. Stores
//! must never let it increase: [`ScoreStore::set_best`] only writes when the
//! candidate is strictly lower than the stored value or nothing is stored.
//! Storage problems read as "no best yet" instead of surfacing as errors.

pub trait ScoreStore {
    /// Stored best, or `None` if nothing usable is stored.
    fn get_best(&self) -> Option<u32>;

    /// Offer a finished game's turn count. Returns true if it became the new best.
    fn set_best(&mut self, turns: u32) -> bool;
}

/// Whether `candidate` should replace `current` as the best score.
pub fn improves_on(current: Option<u32>, candidate: u32) -> bool {
    current.map_or(true, |best| candidate < best)
}

/// In-memory store, for tests and runs without a writable data directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best: Some(best) }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get_best(&self) -> Option<u32> {
        self.best
    }

    fn set_best(&mut self, turns: u32) -> bool {
        if !improves_on(self.best, turns) {
            return false;
        }
        self.best = Some(turns);
        true
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get_best(&self) -> Option<u32> {
        (**self).get_best()
    }

    fn set_best(&mut self, turns: u32) -> bool {
        (**self).set_best(turns)
    }
}
