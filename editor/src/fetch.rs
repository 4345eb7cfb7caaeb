//! Cancellation handle for the editor's initial fetch.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;

/// Where the guarded operation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Pending,
    Settled,
    Cancelled,
}

#[derive(Debug)]
struct Inner {
    phase: FetchPhase,
    reason: Option<String>,
}

/// Shared handle over one cancellable operation.
///
/// Clones observe and control the same operation. Only the first transition
/// out of `Pending` counts: cancelling a settled operation does nothing, and
/// settling a cancelled one does nothing either.
#[derive(Debug, Clone)]
pub struct FetchHandle {
    token: CancellationToken,
    inner: Arc<Mutex<Inner>>,
}

impl Default for FetchHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchHandle {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            inner: Arc::new(Mutex::new(Inner {
                phase: FetchPhase::Pending,
                reason: None,
            })),
        }
    }

    // A poisoned lock still holds a consistent phase; keep using it.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn phase(&self) -> FetchPhase {
        self.lock().phase
    }

    /// Reason given to the cancellation that won, if any.
    pub fn reason(&self) -> Option<String> {
        self.lock().reason.clone()
    }

    /// Request cancellation. Returns whether this call cancelled the operation.
    pub fn cancel(&self, reason: &str) -> bool {
        let mut inner = self.lock();
        if inner.phase != FetchPhase::Pending {
            return false;
        }
        inner.phase = FetchPhase::Cancelled;
        inner.reason = Some(reason.to_string());
        drop(inner);
        self.token.cancel();
        true
    }

    /// Mark the operation settled. Returns false if it was cancelled first.
    pub fn settle(&self) -> bool {
        let mut inner = self.lock();
        match inner.phase {
            FetchPhase::Pending => {
                inner.phase = FetchPhase::Settled;
                true
            }
            FetchPhase::Settled => true,
            FetchPhase::Cancelled => false,
        }
    }

    /// Completes once the operation has been cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }
}
