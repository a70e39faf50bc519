//! Per-request cancellation.

use std::sync::Arc;

use tokio::sync::watch;

/// Handle for abandoning an in-flight request.
///
/// Clones share state: cancelling any clone cancels them all. A cancelled
/// token stays cancelled.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    state: Arc<watch::Sender<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { state: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.state.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Resolves once the token is cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.state.subscribe();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            // Sender is owned by `self`, so it cannot close while we are borrowed.
            std::future::pending::<()>().await;
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
