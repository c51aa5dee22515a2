/// Marker trait for view state.
///
/// `Default` is the state before the first snapshot arrives; `PartialEq`
/// lets renderers skip redraws when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
