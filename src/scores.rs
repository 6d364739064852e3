use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::storage::KeyValueStore;

pub const BEST_SCORES_KEY: &str = "bestScores";

/// Highest WPM per difficulty. Missing tiers read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BestScores {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl BestScores {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// Best scores cached in memory and written through to a [`KeyValueStore`].
#[derive(Debug)]
pub struct BestScoreStore<S: KeyValueStore> {
    backing: S,
    scores: BestScores,
}

impl<S: KeyValueStore> BestScoreStore<S> {
    pub fn new(backing: S) -> Self {
        let scores = match backing.get(BEST_SCORES_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable best scores: {e}");
                BestScores::default()
            }),
            None => BestScores::default(),
        };
        Self { backing, scores }
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores.get(difficulty)
    }

    pub fn all(&self) -> BestScores {
        self.scores
    }

    /// Store `wpm` only if it beats the current best for `difficulty`.
    /// Returns whether the best changed.
    pub fn record_if_better(&mut self, difficulty: Difficulty, wpm: u32) -> bool {
        let slot = self.scores.slot_mut(difficulty);
        if wpm <= *slot {
            return false;
        }

        let previous = *slot;
        *slot = wpm;
        log::info!("new best for {difficulty}: {wpm} wpm (was {previous})");

        let persisted = serde_json::to_string(&self.scores)
            .map_err(Into::into)
            .and_then(|raw| self.backing.set(BEST_SCORES_KEY, &raw));
        if let Err(e) = persisted {
            log::warn!("failed to persist best scores: {e}");
        }
        true
    }

    pub fn backing(&self) -> &S {
        &self.backing
    }

    pub fn backing_mut(&mut self) -> &mut S {
        &mut self.backing
    }
}
