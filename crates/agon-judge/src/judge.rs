//! Judge trait and error types.

use agon_core::Message;
use async_trait::async_trait;
use thiserror::Error;

use crate::verdict::Verdict;

/// Errors from judge backends
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Decides whether the most recent message performed a restricted action.
///
/// The judge sees only the restricted-action description and the message to
/// be judged; game state stays on the caller's side of the boundary.
#[async_trait]
pub trait Judge: Send + Sync + std::fmt::Debug {
    /// Backend name, for logging
    fn name(&self) -> &str;

    /// Judge the given message against the restricted action
    async fn verdict(
        &self,
        restricted_action: &str,
        message: &Message,
    ) -> Result<Verdict, JudgeError>;
}
