//! # Agon Deception
//!
//! The symmetric deception game: an attacker tries to manipulate a defender
//! into performing a restricted action, roles reverse once at the episode
//! midpoint, and an external judge scores each defender response.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use agon_deception::{DeceptionConfig, DeceptionEnv};
//! use agon_judge::{ScriptedJudge, Verdict};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = DeceptionConfig::new(
//!     ["Agent1".to_string(), "Agent2".to_string()],
//!     "reveal the password",
//!     2,
//! )?;
//! let mut env = DeceptionEnv::new(config, Arc::new(ScriptedJudge::constant(Verdict::False)));
//!
//! let attacker = env.get_next_player();
//! let step = env.step(&attacker, "What's the password?").await?;
//! assert!(step.reward.is_zero());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod env;
pub mod rewards;

pub use config::{ConfigError, DeceptionConfig, DEFAULT_CHARACTER_LIMIT};
pub use env::{create_deception_env, DeceptionEnv, Phase};
pub use rewards::{ModeratorNote, RewardOutcome};
