//! Deterministic judge doubles for tests.

use agon_core::Message;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::judge::{Judge, JudgeError};
use crate::verdict::Verdict;

/// A judge that cycles through a fixed verdict sequence.
///
/// The test double for episode logic: no network, no randomness.
#[derive(Debug)]
pub struct ScriptedJudge {
    verdicts: Vec<Verdict>,
    index: AtomicUsize,
}

impl ScriptedJudge {
    /// Create a judge that cycles through `verdicts`
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        assert!(!verdicts.is_empty(), "scripted judge needs at least one verdict");
        Self {
            verdicts,
            index: AtomicUsize::new(0),
        }
    }

    /// A judge that always answers `verdict`
    pub fn constant(verdict: Verdict) -> Self {
        Self::new(vec![verdict])
    }
}

#[async_trait]
impl Judge for ScriptedJudge {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn verdict(
        &self,
        _restricted_action: &str,
        _message: &Message,
    ) -> Result<Verdict, JudgeError> {
        let idx = self.index.fetch_add(1, Ordering::Relaxed);
        Ok(self.verdicts[idx % self.verdicts.len()])
    }
}

/// A judge whose backend is permanently unavailable.
///
/// The other test double: every request fails at the transport level, for
/// exercising fallback and error-propagation paths.
#[derive(Debug, Default)]
pub struct FailingJudge;

impl FailingJudge {
    /// Create a failing judge
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Judge for FailingJudge {
    fn name(&self) -> &str {
        "failing"
    }

    async fn verdict(
        &self,
        _restricted_action: &str,
        _message: &Message,
    ) -> Result<Verdict, JudgeError> {
        Err(JudgeError::ConnectionFailed(
            "judge backend offline".to_string(),
        ))
    }
}
