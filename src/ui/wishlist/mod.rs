//! Headless wish list screen: state, intents, reducer, presenter and the
//! controller connecting them to a [`WishStore`](crate::store::WishStore).

mod controller;
mod intent;
mod presenter;
mod reducer;
mod state;

pub use controller::WishlistController;
pub use intent::WishlistIntent;
pub use presenter::{filter_label, present, AddButton, Segment, WishRow, WishlistScreen, SEGMENTS};
pub use reducer::WishlistReducer;
pub use state::WishlistState;
