//! Model-View-Intent (MVI) primitives for the headless list view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Presenter ──→ host renderer
//!    ↑                                              │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything a renderer needs, cheap to clone and compare
//! - **Intent**: user actions and store notifications
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
