//! Coin-flip judge used when judging is disabled.

use agon_core::Message;
use async_trait::async_trait;

use crate::judge::{Judge, JudgeError};
use crate::verdict::Verdict;

/// Draws each verdict independently and uniformly from {True, False}.
///
/// Selected by configuration when judging is disabled; satisfies the same
/// contract as the real judge so reward logic never branches on the setting.
#[derive(Debug, Default)]
pub struct RandomJudge;

impl RandomJudge {
    /// Create a random judge
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Judge for RandomJudge {
    fn name(&self) -> &str {
        "random"
    }

    async fn verdict(
        &self,
        _restricted_action: &str,
        _message: &Message,
    ) -> Result<Verdict, JudgeError> {
        Ok(if rand::random::<bool>() {
            Verdict::True
        } else {
            Verdict::False
        })
    }
}
