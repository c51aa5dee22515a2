use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use super::snapshot::WishListSnapshot;

/// Callback invoked with the new snapshot after each change.
pub type Observer = Arc<dyn Fn(&WishListSnapshot) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: AtomicU64,
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
    /// Serializes deliveries and remembers the highest revision delivered.
    /// Reentrant so an observer may mutate the store it watches.
    delivered: ReentrantMutex<Cell<u64>>,
}

impl ObserverRegistry {
    pub fn subscribe(&self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.lock().push((id, observer));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.lock().len()
    }

    /// Call every observer with `snapshot`, in revision order.
    ///
    /// A snapshot older than one already delivered is dropped, also midway
    /// through the observer list when a nested change overtook it. The
    /// observer list lock is released before any observer runs.
    pub fn notify(&self, snapshot: &WishListSnapshot) {
        let delivered = self.delivered.lock();
        if snapshot.revision < delivered.get() {
            tracing::trace!(revision = snapshot.revision, "Skipping superseded notification");
            return;
        }
        delivered.set(snapshot.revision);

        let observers: Vec<Observer> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            if snapshot.revision < delivered.get() {
                return;
            }
            observer(snapshot);
        }
    }
}
