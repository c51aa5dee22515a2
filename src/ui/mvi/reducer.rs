use super::intent::Intent;
use super::state::UiState;

/// The only place where view state changes.
///
/// Implementations must be pure: no I/O, no access to the store.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
