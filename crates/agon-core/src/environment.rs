//! The episode contract exposed to a driving loop.

use async_trait::async_trait;
use thiserror::Error;

use crate::message::Message;
use crate::reward::RewardVector;

/// Fatal episode errors.
///
/// These surface to the caller and abort the episode; continuing after any of
/// them would leave the game state undefined.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("wrong player: expected {expected}, got {actual}")]
    WrongPlayer { expected: String, actual: String },
    #[error("turn {turn} exceeds the episode bound of {max} turns")]
    TurnOverflow { turn: u32, max: u32 },
    #[error("judgment unavailable: {0}")]
    Judgment(String),
}

/// Result of one environment step
#[derive(Debug, Clone)]
pub struct TimeStep {
    /// Recent dialogue visible to the acting player
    pub observation: Vec<Message>,
    /// Scores for this step, keyed by participant identity
    pub reward: RewardVector,
    /// Whether the episode has ended
    pub terminal: bool,
}

/// Contract every Agon game environment satisfies.
///
/// Execution is strictly sequential: one `step` call completes fully,
/// including any judge invocation, before the next is accepted. A single
/// episode instance is never shared; separate instances may run concurrently.
#[async_trait]
pub trait Environment: Send {
    /// Reinitialize the episode. Configuration is untouched.
    fn reset(&mut self);

    /// Identity expected to act next
    fn get_next_player(&self) -> String;

    /// Submit `action` on behalf of `player_name` and advance the game
    async fn step(&mut self, player_name: &str, action: &str) -> Result<TimeStep, EnvError>;

    /// Recent log entries formatted for presentation to `player_name`
    fn get_observation(&self, player_name: &str) -> Vec<Message>;
}
