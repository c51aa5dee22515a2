use crate::model::WishFilter;
use crate::store::WishListSnapshot;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum WishlistIntent {
    Select(WishFilter),
    RefreshStarted,
    RefreshFinished,
    /// The store published a new snapshot.
    SnapshotChanged(WishListSnapshot),
    OpenCreateSheet,
    CloseCreateSheet,
}

impl Intent for WishlistIntent {}
