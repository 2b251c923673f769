//! Background cart sync worker
//!
//! The cart store publishes a [`CartSnapshot`] after every mutation. A single
//! worker per session pushes the newest snapshot to the remote, one request at
//! a time. Snapshots published while a push is in flight replace each other,
//! so only the latest one is sent once the push returns.

use crate::remote::CartRemote;
use shared::CartItem;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cart contents at one point in time
#[derive(Debug, Clone, Default)]
pub struct CartSnapshot {
    /// Increases by one per publish
    pub revision: u64,
    pub items: Vec<CartItem>,
}

/// Owner side of a running sync worker
pub struct SyncHandle {
    tx: watch::Sender<CartSnapshot>,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Spawn the worker for `user_id`. Must be called inside a tokio runtime.
    pub fn spawn(user_id: impl Into<String>, remote: Arc<dyn CartRemote>) -> Self {
        let (tx, rx) = watch::channel(CartSnapshot::default());
        let shutdown = CancellationToken::new();
        let worker = SyncWorker {
            user_id: user_id.into(),
            remote,
            rx,
            shutdown: shutdown.clone(),
        };
        let task = tokio::spawn(worker.run());
        Self { tx, shutdown, task }
    }

    /// Replace the pending snapshot with `items`. Never blocks.
    pub fn publish(&self, items: Vec<CartItem>) {
        self.tx.send_modify(|snapshot| {
            snapshot.revision += 1;
            snapshot.items = items;
        });
    }

    /// Revision of the most recently published snapshot
    pub fn revision(&self) -> u64 {
        self.tx.borrow().revision
    }

    /// Stop the worker after it flushes any unsent snapshot
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "Cart sync worker panicked");
        }
    }
}

enum Wake {
    Shutdown,
    Changed,
    Closed,
}

struct SyncWorker {
    user_id: String,
    remote: Arc<dyn CartRemote>,
    rx: watch::Receiver<CartSnapshot>,
    shutdown: CancellationToken,
}

impl SyncWorker {
    async fn run(mut self) {
        tracing::info!(user_id = %self.user_id, "Cart sync worker started");

        loop {
            let wake = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => Wake::Shutdown,
                changed = self.rx.changed() => match changed {
                    Ok(()) => Wake::Changed,
                    Err(_) => Wake::Closed,
                },
            };

            match wake {
                Wake::Changed => {
                    let snapshot = self.rx.borrow_and_update().clone();
                    self.push(&snapshot).await;
                }
                Wake::Shutdown => {
                    if self.rx.has_changed().unwrap_or(false) {
                        let snapshot = self.rx.borrow_and_update().clone();
                        self.push(&snapshot).await;
                    }
                    break;
                }
                // Store dropped without shutdown
                Wake::Closed => break,
            }
        }

        tracing::info!(user_id = %self.user_id, "Cart sync worker stopped");
    }

    async fn push(&self, snapshot: &CartSnapshot) {
        match self.remote.push_cart(&self.user_id, &snapshot.items).await {
            Ok(()) => tracing::debug!(
                user_id = %self.user_id,
                revision = snapshot.revision,
                items = snapshot.items.len(),
                "Cart pushed"
            ),
            Err(e) => tracing::warn!(
                user_id = %self.user_id,
                revision = snapshot.revision,
                error = %e,
                "Cart push failed"
            ),
        }
    }
}
