use parking_lot::RwLock;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// Point-in-time copy of the shared list.
pub type Snapshot = Vec<String>;

const DEFAULT_CAPACITY: usize = 64;

/// Replicated-state broadcaster: stores the latest snapshot and fans
/// every publish out to all attached receivers. A new receiver gets the
/// stored snapshot first (replay depth 1), then publishes in order.
pub struct SnapshotFeed {
    latest: RwLock<Option<Snapshot>>,
    sender: broadcast::Sender<Snapshot>,
}

impl SnapshotFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            latest: RwLock::new(None),
            sender,
        }
    }

    /// Store `snapshot` as latest and deliver it to all current
    /// receivers. Never blocks on consumers; sending with zero
    /// receivers just updates the stored snapshot.
    ///
    /// The store and the send happen under the write lock so that
    /// `subscribe` cannot observe a latest value newer than the head of
    /// its receiver queue (which would replay a duplicate).
    pub fn publish(&self, snapshot: Snapshot) {
        let mut latest = self.latest.write();
        *latest = Some(snapshot.clone());
        let _ = self.sender.send(snapshot);
    }

    /// Attach a new receiver. The first item it yields is the latest
    /// published snapshot, if there is one.
    pub fn subscribe(&self) -> SnapshotRx {
        let latest = self.latest.read();
        SnapshotRx {
            replay: latest.clone(),
            rx: self.sender.subscribe(),
        }
    }

    /// Latest published snapshot, if any.
    pub fn latest(&self) -> Option<Snapshot> {
        self.latest.read().clone()
    }

    /// Number of currently attached receivers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SnapshotFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Per-subscriber handle onto a [`SnapshotFeed`]. Dropping it detaches
/// the subscriber without affecting the feed or other receivers.
pub struct SnapshotRx {
    replay: Option<Snapshot>,
    rx: broadcast::Receiver<Snapshot>,
}

impl SnapshotRx {
    /// Next snapshot, or None once the feed is gone. A receiver that
    /// falls behind the channel capacity skips the overwritten values
    /// and resumes from the oldest retained one; it never stalls the
    /// publisher and never observes snapshots out of order.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        if let Some(snapshot) = self.replay.take() {
            return Some(snapshot);
        }
        loop {
            match self.rx.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "slow snapshot subscriber, dropping toward latest");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
