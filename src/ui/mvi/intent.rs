/// Marker trait for intents.
///
/// Intents are user actions (select a filter, open the create sheet) or
/// events coming from the store (a new snapshot, a refresh finishing).
pub trait Intent: Send + 'static {}
