use crate::ui::mvi::Reducer;
use crate::ui::wishlist::intent::WishlistIntent;
use crate::ui::wishlist::state::WishlistState;

pub struct WishlistReducer;

impl Reducer for WishlistReducer {
    type State = WishlistState;
    type Intent = WishlistIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WishlistIntent::Select(selected) => WishlistState { selected, ..state },
            WishlistIntent::RefreshStarted => WishlistState {
                is_refreshing: true,
                pending_refreshes: state.pending_refreshes + 1,
                ..state
            },
            WishlistIntent::RefreshFinished => {
                let pending_refreshes = state.pending_refreshes.saturating_sub(1);
                WishlistState {
                    is_refreshing: pending_refreshes > 0,
                    pending_refreshes,
                    ..state
                }
            }
            WishlistIntent::SnapshotChanged(snapshot) => {
                if snapshot.revision < state.snapshot.revision {
                    return state;
                }
                WishlistState { snapshot, ..state }
            }
            WishlistIntent::OpenCreateSheet => WishlistState {
                create_sheet_open: true,
                ..state
            },
            WishlistIntent::CloseCreateSheet => WishlistState {
                create_sheet_open: false,
                ..state
            },
        }
    }
}
