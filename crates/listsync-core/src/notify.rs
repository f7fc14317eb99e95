use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

const DEFAULT_CAPACITY: usize = 64;

/// Best-effort broadcaster for human-readable notifications. No replay:
/// an event published with zero subscribers attached is silently
/// dropped.
pub struct NotifyBus {
    sender: broadcast::Sender<String>,
}

impl NotifyBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers, if any.
    pub fn publish(&self, message: impl Into<String>) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(message.into());
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> NotifyRx {
        NotifyRx {
            rx: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NotifyBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Per-subscriber handle onto a [`NotifyBus`].
pub struct NotifyRx {
    rx: broadcast::Receiver<String>,
}

impl NotifyRx {
    /// Next notification, or None once the bus is gone. Lagged
    /// messages are skipped; this channel is informational only.
    pub async fn recv(&mut self) -> Option<String> {
        loop {
            match self.rx.recv().await {
                Ok(message) => return Some(message),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "notification subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
