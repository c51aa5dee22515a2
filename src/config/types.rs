use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::theme::ThemeConfig;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub localization: LocalizationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub buttons: ButtonsConfig,
    /// Whether the wish detail shows its comment section.
    #[serde(default)]
    pub comment_section: Visibility,
    /// Whether the create form asks for a contact e-mail.
    #[serde(default)]
    pub email_field: EmailField,
}

/// Connection settings for the wishlist backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g., "https://wishkit.io").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key identifying the host application.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Identity of the current user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Stable user identifier. A fresh one is generated per session when unset.
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

impl UserConfig {
    pub fn resolve_uuid(&self) -> Uuid {
        self.uuid.unwrap_or_else(Uuid::new_v4)
    }
}

/// Language selection and per-key text overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationConfig {
    /// BCP 47 tag such as "en" or "de-DE".
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Replacement phrases keyed by localization key (e.g., `refresh = "Reload"`).
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

/// Show/hide toggle used by several widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Show,
    Hide,
}

/// Where the "create wish" button is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddButtonLocation {
    #[default]
    Floating,
    NavigationBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddButtonConfig {
    #[serde(default)]
    pub display: Visibility,
    #[serde(default)]
    pub location: AddButtonLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonsConfig {
    /// State picker above the list.
    #[serde(default)]
    pub segmented_control: Visibility,
    #[serde(default)]
    pub add_button: AddButtonConfig,
}

/// Contact e-mail requirement on the create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailField {
    None,
    #[default]
    Optional,
    Required,
}

fn default_base_url() -> String {
    "https://wishkit.io".to_string()
}

fn default_request_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            overrides: HashMap::new(),
        }
    }
}
