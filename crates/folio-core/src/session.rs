//! Generation tokens for cancelling superseded asynchronous work.
//!
//! A [`SessionRegistry`] hands out [`LoadSession`]s. Beginning a new session
//! bumps the generation and cancels the previous session's token, so every
//! suspension point guarded by [`LoadSession::guard`] resolves at once and the
//! stale task winds down without touching shared state.

use std::future::Future;
use std::sync::Arc;

use futures::future::{select, Either};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
struct RegistryState {
    generation: u64,
    cancel: CancellationToken,
}

/// Issues load sessions; exactly one is current at any time.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    inner: Arc<Mutex<RegistryState>>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryState {
                generation: 0,
                cancel: CancellationToken::new(),
            })),
        }
    }

    /// Start a new session, superseding the current one.
    pub fn begin(&self) -> LoadSession {
        let mut state = self.inner.lock();
        state.cancel.cancel();
        state.generation += 1;
        state.cancel = CancellationToken::new();

        tracing::debug!(generation = state.generation, "Load session started");

        LoadSession {
            generation: state.generation,
            cancel: state.cancel.clone(),
            registry: self.clone(),
        }
    }

    /// Supersede the current session without starting another (component
    /// teardown).
    pub fn cancel_current(&self) {
        let mut state = self.inner.lock();
        state.cancel.cancel();
        state.generation += 1;
        state.cancel = CancellationToken::new();
    }

    pub fn current_generation(&self) -> u64 {
        self.inner.lock().generation
    }
}

/// One render pass over the grid.
#[derive(Debug, Clone)]
pub struct LoadSession {
    generation: u64,
    cancel: CancellationToken,
    registry: SessionRegistry,
}

impl LoadSession {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no newer session has started since this one.
    pub fn is_current(&self) -> bool {
        !self.cancel.is_cancelled() && self.registry.current_generation() == self.generation
    }

    /// Run `fut` unless the session is superseded first.
    ///
    /// Returns `None` when the session was (or became) stale; the caller must
    /// then stop without mutating anything.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        if !self.is_current() {
            return None;
        }

        let cancelled = self.cancel.cancelled();
        futures::pin_mut!(fut);
        futures::pin_mut!(cancelled);

        match select(fut, cancelled).await {
            Either::Left((output, _)) if self.is_current() => Some(output),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_begin_supersedes_previous() {
        let registry = SessionRegistry::new();
        let first = registry.begin();
        assert!(first.is_current());

        let second = registry.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.generation(), first.generation() + 1);
    }

    #[test]
    fn test_cancel_current() {
        let registry = SessionRegistry::new();
        let session = registry.begin();
        registry.cancel_current();
        assert!(!session.is_current());
    }

    #[tokio::test(start_paused = true)]
    async fn test_guard_drops_superseded_work() {
        let registry = SessionRegistry::new();
        let session = registry.begin();

        let waiter = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .guard(tokio::time::sleep(Duration::from_secs(60)))
                    .await
            })
        };

        tokio::task::yield_now().await;
        registry.begin();

        assert_eq!(waiter.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_guard_passes_output_through() {
        let registry = SessionRegistry::new();
        let session = registry.begin();
        assert_eq!(session.guard(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn test_guard_refuses_stale_session() {
        let registry = SessionRegistry::new();
        let stale = registry.begin();
        registry.begin();
        assert_eq!(stale.guard(async { 7 }).await, None);
    }
}
