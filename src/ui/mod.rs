//! Presentation layer consumed by host renderers.

pub mod mvi;
pub mod wishlist;
