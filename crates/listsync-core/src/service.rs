use crate::error::{Error, Result};
use crate::feed::{Snapshot, SnapshotFeed, SnapshotRx};
use crate::list::BoundedList;
use crate::notify::{NotifyBus, NotifyRx};
use parking_lot::Mutex;

/// The single source of truth for the shared string list.
///
/// Every mutation runs as one critical section covering mutate,
/// snapshot, and publish, so concurrent mutators cannot interleave and
/// published snapshots are strictly ordered by mutation order.
///
/// Construct one instance at startup and share it behind an `Arc`;
/// there is no ambient global.
pub struct ListService {
    list: Mutex<BoundedList>,
    feed: SnapshotFeed,
    notify: NotifyBus,
}

impl ListService {
    /// Empty service, nothing published yet.
    pub fn new() -> Self {
        Self {
            list: Mutex::new(BoundedList::new()),
            feed: SnapshotFeed::default(),
            notify: NotifyBus::default(),
        }
    }

    /// Service pre-populated with the demo data set, with the initial
    /// snapshot already published so late subscribers replay it.
    pub fn with_seed_data() -> Self {
        let service = Self::new();
        {
            let mut list = service.list.lock();
            for value in ["GraphQL", "World", "Hello"] {
                list.insert_front(value.to_string());
            }
            service.feed.publish(list.snapshot());
        }
        service
    }

    /// Current snapshot of the list. Read-only, no side effects.
    pub fn strings(&self) -> Vec<String> {
        self.list.lock().snapshot()
    }

    /// Prepend a value, evicting the tail entry past the cap, then
    /// broadcast the new snapshot and an "Item added" notification.
    /// Value validation is the caller's contract; this never fails.
    pub fn add_string(&self, value: String) {
        let mut list = self.list.lock();
        list.insert_front(value.clone());
        let snapshot = list.snapshot();
        tracing::debug!(len = snapshot.len(), "added entry");
        self.feed.publish(snapshot);
        self.notify.publish(format!("Item added: {value}"));
    }

    /// Overwrite the entry at `index`. A bad index mutates nothing and
    /// broadcasts nothing.
    pub fn update_string(&self, index: usize, new_value: String) -> Result<()> {
        let mut list = self.list.lock();
        if !list.set(index, new_value.clone()) {
            return Err(Error::invalid_index(index, list.len()));
        }
        self.feed.publish(list.snapshot());
        self.notify.publish(format!("Item updated: {new_value}"));
        Ok(())
    }

    /// Remove the entry at `index`, returning the removed value. A bad
    /// index mutates nothing and broadcasts nothing.
    pub fn delete_string(&self, index: usize) -> Result<String> {
        let mut list = self.list.lock();
        let Some(removed) = list.remove_at(index) else {
            return Err(Error::invalid_index(index, list.len()));
        };
        self.feed.publish(list.snapshot());
        self.notify.publish(format!("Item removed: {removed}"));
        Ok(removed)
    }

    /// Live snapshot stream; the first item is the current snapshot.
    pub fn subscribe(&self) -> SnapshotRx {
        self.feed.subscribe()
    }

    /// Side channel of informational notifications, no replay.
    pub fn subscribe_notifications(&self) -> NotifyRx {
        self.notify.subscribe()
    }

    /// Latest published snapshot, if any mutation or seeding happened.
    pub fn latest_snapshot(&self) -> Option<Snapshot> {
        self.feed.latest()
    }
}

impl Default for ListService {
    fn default() -> Self {
        Self::new()
    }
}
