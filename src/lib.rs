//! Client SDK for an in-app feature wishlist.
//!
//! Fetches user-submitted wishes from a remote backend, lets users upvote,
//! comment and create wishes, and exposes an observable view-model plus a
//! headless list-view model for host renderers.
//!
//! ```no_run
//! use wishkit::config::{Config, ConfigStore};
//! use wishkit::config::ColorScheme;
//! use wishkit::ui::wishlist::WishlistController;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigStore::new(Config::load()?, Config::config_path());
//! let controller = WishlistController::connect(config)?;
//! controller.refresh().await?;
//! let screen = controller.screen(ColorScheme::Light);
//! for row in &screen.rows {
//!     println!("{} ({})", row.title, row.vote_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod store;
pub mod telemetry;
pub mod ui;

pub use error::{ValidationError, WishError};
