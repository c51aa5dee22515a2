use crate::model::WishFilter;
use crate::store::WishListSnapshot;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistState {
    pub selected: WishFilter,
    /// A user-initiated refresh is running.
    pub is_refreshing: bool,
    /// Refreshes started and not yet finished.
    pub pending_refreshes: u32,
    pub create_sheet_open: bool,
    pub snapshot: WishListSnapshot,
}

impl UiState for WishlistState {}
