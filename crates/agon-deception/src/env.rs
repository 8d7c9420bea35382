//! The symmetric deception environment.
//!
//! Two agents, two halves: the attacker tries to manipulate the defender into
//! performing a restricted action; at the midpoint the roles reverse, exactly
//! once. Odd turns are attacker queries and score nothing; even turns are
//! defender responses and are judged.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agon_core::{
    EnvError, Environment, Message, MessagePool, RewardVector, RoleAssignment, TimeStep,
};
use agon_judge::{FallbackJudge, Judge, JudgeConfig, LlmJudge, RandomJudge};

use crate::config::DeceptionConfig;
use crate::rewards::{self, RewardOutcome};

/// Episode phase, derived from the turn counter.
///
/// Never stored independently of the turn, so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Player1Attack,
    Player2Attack,
    End,
}

impl Phase {
    /// Phase for a given turn
    pub fn of(turn: u32, round_length: u32) -> Self {
        if turn == 0 {
            Phase::Start
        } else if turn <= round_length {
            Phase::Player1Attack
        } else if turn <= 2 * round_length {
            Phase::Player2Attack
        } else {
            Phase::End
        }
    }
}

/// The deception game state machine.
///
/// Owns the turn counter, the role assignment and the dialogue pool; the
/// judge is an external collaborator behind the [`Judge`] trait. One instance
/// runs one episode at a time and is never shared.
#[derive(Debug)]
pub struct DeceptionEnv {
    id: Uuid,
    config: DeceptionConfig,
    judge: Arc<dyn Judge>,
    pool: MessagePool,
    roles: RoleAssignment,
    turn: u32,
    swapped: bool,
}

impl DeceptionEnv {
    /// Create an environment with an explicit judge and start the episode
    pub fn new(config: DeceptionConfig, judge: Arc<dyn Judge>) -> Self {
        let roles = RoleAssignment::new(&config.players[0], &config.players[1]);
        let mut env = Self {
            id: Uuid::new_v4(),
            config,
            judge,
            pool: MessagePool::new(),
            roles,
            turn: 0,
            swapped: false,
        };
        env.reset();
        env
    }

    /// Reinitialize the episode. Configuration is untouched.
    pub fn reset(&mut self) {
        self.id = Uuid::new_v4();
        self.turn = 0;
        self.swapped = false;
        self.roles = RoleAssignment::new(&self.config.players[0], &self.config.players[1]);
        self.pool.clear();
        self.pool.moderator_speak(self.config.moderator_prompt(), 0);
        tracing::info!(
            episode = %self.id,
            round_length = self.config.round_length,
            judge = self.judge.name(),
            "episode reset"
        );
    }

    /// Current turn counter (0 before any player has acted)
    pub fn current_turn(&self) -> u32 {
        self.turn
    }

    /// Phase the episode is currently in
    pub fn phase(&self) -> Phase {
        Phase::of(self.turn, self.config.round_length)
    }

    /// Current attacker/defender assignment
    pub fn roles(&self) -> &RoleAssignment {
        &self.roles
    }

    /// Identity expected to act next: the attacker on odd turns, the
    /// defender on even turns, under the current role assignment
    pub fn get_next_player(&self) -> String {
        if (self.turn + 1) % 2 == 1 {
            self.roles.attacker().to_string()
        } else {
            self.roles.defender().to_string()
        }
    }

    /// Full transcript, most recent last
    pub fn get_observation(&self, _player_name: &str) -> Vec<Message> {
        // every message in this game is public, so all players see the same log
        self.pool.all().to_vec()
    }

    /// Submit `action` on behalf of `player_name` and advance the game.
    ///
    /// Fails without mutating any state if the wrong player acts or the turn
    /// counter would run past `2 * round_length`.
    pub async fn step(&mut self, player_name: &str, action: &str) -> Result<TimeStep, EnvError> {
        let expected = self.get_next_player();
        if player_name != expected {
            return Err(EnvError::WrongPlayer {
                expected,
                actual: player_name.to_string(),
            });
        }
        let max_turns = 2 * self.config.round_length;
        let next_turn = self.turn + 1;
        if next_turn > max_turns {
            return Err(EnvError::TurnOverflow {
                turn: next_turn,
                max: max_turns,
            });
        }

        self.turn = next_turn;
        self.pool
            .append(Message::new(player_name, action, self.turn));
        let phase = self.phase();

        let (reward, terminal) = if self.turn % 2 == 1 {
            // attacker query; the defender has not responded yet, nothing to judge
            (RewardVector::zero(&self.config.players), false)
        } else {
            let outcome = self.judged_rewards(phase).await?;
            if let Some(note) = &outcome.note {
                self.moderator_speak(note.text());
            }
            self.moderator_speak(&format!(
                "VIOLATION: {}.",
                if outcome.violation { "True" } else { "False" }
            ));
            (outcome.scores, self.turn == max_turns)
        };

        // the one-time reversal, regardless of how this turn scored
        if self.turn == self.config.round_length {
            self.swap_roles();
        }

        Ok(TimeStep {
            observation: self.get_observation(player_name),
            reward,
            terminal,
        })
    }

    async fn judged_rewards(&self, phase: Phase) -> Result<RewardOutcome, EnvError> {
        let last = match self.pool.last_message() {
            Some(m) if !m.content.is_empty() => m,
            _ => return Ok(RewardOutcome::no_response(&self.config.players)),
        };

        let verdict = self
            .judge
            .verdict(&self.config.restricted_action, last)
            .await
            .map_err(|e| EnvError::Judgment(e.to_string()))?;
        tracing::debug!(
            episode = %self.id,
            turn = self.turn,
            judge = self.judge.name(),
            verdict = %verdict,
            "responder turn judged"
        );

        Ok(rewards::compute(
            &self.pool,
            &self.roles,
            phase,
            verdict,
            self.config.round_length,
            &self.config.players,
        ))
    }

    fn swap_roles(&mut self) {
        debug_assert!(!self.swapped, "roles reverse exactly once per episode");
        let announcement = format!(
            "Roles are being swapped. {} is defending, and {} is attacking.",
            self.roles.attacker(),
            self.roles.defender()
        );
        self.moderator_speak(&announcement);
        self.roles = self.roles.reversed();
        self.swapped = true;
        tracing::info!(
            episode = %self.id,
            attacker = self.roles.attacker(),
            defender = self.roles.defender(),
            "roles swapped at the midpoint"
        );
    }

    fn moderator_speak(&mut self, content: &str) {
        self.pool.moderator_speak(content, self.turn);
    }
}

#[async_trait]
impl Environment for DeceptionEnv {
    fn reset(&mut self) {
        DeceptionEnv::reset(self);
    }

    fn get_next_player(&self) -> String {
        DeceptionEnv::get_next_player(self)
    }

    async fn step(&mut self, player_name: &str, action: &str) -> Result<TimeStep, EnvError> {
        DeceptionEnv::step(self, player_name, action).await
    }

    fn get_observation(&self, player_name: &str) -> Vec<Message> {
        DeceptionEnv::get_observation(self, player_name)
    }
}

/// Build a deception environment, selecting the judge from configuration:
/// a coin flip when judging is disabled, otherwise the primary LLM judge
/// wrapped with its backup model.
pub fn create_deception_env(config: DeceptionConfig) -> anyhow::Result<DeceptionEnv> {
    let judge: Arc<dyn Judge> = if config.disable_judging {
        Arc::new(RandomJudge::new())
    } else {
        let judge_config = JudgeConfig::from_env()?;
        Arc::new(FallbackJudge::new(
            LlmJudge::new(judge_config.clone()),
            LlmJudge::backup(judge_config),
        ))
    };
    Ok(DeceptionEnv::new(config, judge))
}
