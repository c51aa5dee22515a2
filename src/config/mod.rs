//! Host integration surface: configuration file, theme and identity.

mod auth;
mod credentials;
mod loader;
mod store;
mod theme;
mod types;

pub use auth::{build_identity_headers, AuthHeader, API_KEY_HEADER, USER_UUID_HEADER};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use theme::{Color, ColorScheme, SchemeColor, ThemeConfig, ThemeRole};
pub use types::{
    AddButtonConfig, AddButtonLocation, ApiConfig, ButtonsConfig, Config, EmailField,
    LocalizationConfig, UserConfig, Visibility,
};
