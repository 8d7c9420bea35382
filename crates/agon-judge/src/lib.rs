//! # Agon Judge
//!
//! The judgment boundary for Agon games.
//!
//! A [`Judge`] looks at the most recent message of an episode and decides
//! whether the speaker performed a restricted action, answering with a
//! three-valued [`Verdict`]: `True`, `False`, or `Unknown` when no structured
//! answer could be extracted. How `Unknown` is scored is the game's business,
//! not the judge's.
//!
//! ## Implementations
//!
//! - [`LlmJudge`] — single chat-completions backend
//! - [`FallbackJudge`] — wraps a primary judge with a one-shot backup
//! - [`RandomJudge`] — uniform coin flip, used when judging is disabled
//! - [`ScriptedJudge`] / [`FailingJudge`] — deterministic doubles for tests

pub mod config;
pub mod fallback;
pub mod judge;
pub mod llm;
pub mod random;
pub mod scripted;
pub mod verdict;

pub use config::{ConfigError, JudgeConfig};
pub use fallback::FallbackJudge;
pub use judge::{Judge, JudgeError};
pub use llm::LlmJudge;
pub use random::RandomJudge;
pub use scripted::{FailingJudge, ScriptedJudge};
pub use verdict::{parse_verdict, Verdict};
