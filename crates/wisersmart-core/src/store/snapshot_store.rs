// ── Snapshot store ──
//
// Lock-free holder for the current snapshot. Readers get an `Arc` to an
// immutable snapshot; a refresh swaps in a new one atomically.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::Snapshot;

pub struct SnapshotStore {
    current: ArcSwapOption<Snapshot>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (last_refresh, _) = watch::channel(None);
        Self {
            current: ArcSwapOption::empty(),
            last_refresh,
        }
    }

    /// The current snapshot, if any.
    pub fn load(&self) -> Option<Arc<Snapshot>> {
        self.current.load_full()
    }

    /// Replace the current snapshot.
    pub(crate) fn publish(&self, snapshot: Arc<Snapshot>) {
        let fetched_at = snapshot.fetched_at;
        self.current.store(Some(snapshot));
        let _ = self.last_refresh.send(Some(fetched_at));
    }

    /// Drop the current snapshot so the next read refetches.
    pub(crate) fn clear(&self) {
        self.current.store(None);
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// Time since the last successful refresh.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|t| Utc::now() - t)
    }

    /// Watch for refresh completions.
    pub fn subscribe_last_refresh(&self) -> watch::Receiver<Option<DateTime<Utc>>> {
        self.last_refresh.subscribe()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_snapshot() -> Snapshot {
        Snapshot {
            properties: vec![],
            home_mode: None,
            groups: vec![],
            devices: vec![],
            temperatures: vec![],
            appliances: vec![],
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn publish_then_clear() {
        let store = SnapshotStore::new();
        assert!(store.load().is_none());
        assert!(store.data_age().is_none());

        let snap = Arc::new(empty_snapshot());
        store.publish(Arc::clone(&snap));
        let loaded = store.load();
        assert!(loaded.is_some_and(|s| Arc::ptr_eq(&s, &snap)));
        assert_eq!(store.last_refresh(), Some(snap.fetched_at));

        store.clear();
        assert!(store.load().is_none());
        // The timestamp records the last successful refresh, not presence.
        assert!(store.last_refresh().is_some());
    }

    #[test]
    fn subscribers_see_refreshes() {
        let store = SnapshotStore::new();
        let mut rx = store.subscribe_last_refresh();
        store.publish(Arc::new(empty_snapshot()));
        assert!(rx.has_changed().unwrap_or(false));
        assert!(rx.borrow_and_update().is_some());
    }
}
