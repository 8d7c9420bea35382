//! One-shot fallback across judge backends.

use agon_core::Message;
use async_trait::async_trait;

use crate::judge::{Judge, JudgeError};
use crate::verdict::Verdict;

/// Wraps a primary judge with a single backup.
///
/// The backup is consulted only when the primary fails; a failure of the
/// backup propagates to the caller. One retry, never more.
#[derive(Debug)]
pub struct FallbackJudge<P: Judge, B: Judge> {
    primary: P,
    backup: B,
}

impl<P: Judge, B: Judge> FallbackJudge<P, B> {
    /// Wrap `primary` with `backup`
    pub fn new(primary: P, backup: B) -> Self {
        Self { primary, backup }
    }
}

#[async_trait]
impl<P: Judge, B: Judge> Judge for FallbackJudge<P, B> {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn verdict(
        &self,
        restricted_action: &str,
        message: &Message,
    ) -> Result<Verdict, JudgeError> {
        match self.primary.verdict(restricted_action, message).await {
            Ok(verdict) => Ok(verdict),
            Err(e) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    backup = self.backup.name(),
                    error = %e,
                    "primary judge failed, retrying with backup"
                );
                self.backup.verdict(restricted_action, message).await
            }
        }
    }
}
