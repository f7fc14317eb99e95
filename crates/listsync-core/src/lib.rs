//! listsync core
//!
//! The server-side half of a real-time synchronized string list:
//! - [`BoundedList`]: the ordered, capacity-bounded collection
//! - [`SnapshotFeed`]: latest-snapshot fan-out with replay-of-one
//! - [`NotifyBus`]: best-effort human-readable event broadcast
//! - [`ListService`]: atomic mutate-then-broadcast orchestration
//!
//! Transport (HTTP/WebSocket) lives in the server crate; this crate
//! only deals in plain `Vec<String>` snapshots.

pub mod error;
pub mod feed;
pub mod list;
pub mod notify;
pub mod service;

pub use error::{Error, Result};
pub use feed::{Snapshot, SnapshotFeed, SnapshotRx};
pub use list::{BoundedList, MAX_ENTRIES};
pub use notify::{NotifyBus, NotifyRx};
pub use service::ListService;
