//! Per-participant reward vectors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores keyed by participant identity.
///
/// Keys are the original participant names and are never reindexed when roles
/// swap; routing attacker/defender scores to the right identity is the reward
/// policy's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardVector {
    scores: BTreeMap<String, f64>,
}

impl RewardVector {
    /// A zero vector covering the given participants
    pub fn zero(players: &[String; 2]) -> Self {
        let mut scores = BTreeMap::new();
        scores.insert(players[0].clone(), 0.0);
        scores.insert(players[1].clone(), 0.0);
        Self { scores }
    }

    /// Score for a participant (0.0 if absent)
    pub fn get(&self, player: &str) -> f64 {
        self.scores.get(player).copied().unwrap_or(0.0)
    }

    /// Assign a participant's score
    pub fn set(&mut self, player: &str, score: f64) {
        self.scores.insert(player.to_string(), score);
    }

    /// Whether every entry is zero
    pub fn is_zero(&self) -> bool {
        self.scores.values().all(|s| *s == 0.0)
    }
}
