use std::collections::BTreeMap;

use uuid::Uuid;

use crate::model::{Wish, WishFilter, WishState};

/// Progress of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Fetching,
    Fetched,
    /// Last fetch failed; the cache still holds the previous list.
    Error(String),
}

/// Immutable view of the store handed to observers and renderers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishListSnapshot {
    pub partitions: BTreeMap<WishState, Vec<Wish>>,
    pub status: FetchStatus,
    /// Bumped every time the cache is replaced by a fetch.
    pub generation: u64,
    /// Bumped on every published change. Observers never receive a lower
    /// revision after a higher one.
    pub revision: u64,
}

impl WishListSnapshot {
    pub fn wishes(&self, state: WishState) -> &[Wish] {
        self.partitions.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Wishes matching `filter`, in partition order.
    pub fn filtered(&self, filter: WishFilter) -> Vec<&Wish> {
        filter
            .states()
            .iter()
            .flat_map(|state| self.wishes(*state))
            .collect()
    }

    pub fn count(&self, filter: WishFilter) -> usize {
        filter.states().iter().map(|s| self.wishes(*s).len()).sum()
    }

    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: Uuid) -> Option<&Wish> {
        self.partitions.values().flatten().find(|w| w.id == id)
    }

    pub fn is_fetching(&self) -> bool {
        self.status == FetchStatus::Fetching
    }
}

/// Group wishes by state, most votes first within each state.
///
/// The sort is stable, so equal vote counts keep server order.
pub fn partition(wishes: Vec<Wish>) -> BTreeMap<WishState, Vec<Wish>> {
    let mut partitions: BTreeMap<WishState, Vec<Wish>> = BTreeMap::new();
    for wish in wishes {
        partitions.entry(wish.state).or_default().push(wish);
    }
    for list in partitions.values_mut() {
        list.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
    }
    partitions
}
