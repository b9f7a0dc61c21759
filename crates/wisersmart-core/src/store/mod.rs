// Snapshot storage and refresh orchestration.

mod refresh;
mod snapshot;
mod snapshot_store;

pub use snapshot::Snapshot;
pub use snapshot_store::SnapshotStore;

pub(crate) use refresh::fetch_snapshot;
