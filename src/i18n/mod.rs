//! Localization table.
//!
//! Resolves a [`LocalizationKey`] to display text. Lookup order is the
//! host's override, the selected locale's built-in table, then English.
//! Lookups never fail.

mod key;
mod tables;

use std::collections::HashMap;

pub use key::{LocalizationKey, UnknownKey};
pub use tables::Locale;

use crate::config::LocalizationConfig;
use crate::model::{CommentAuthor, WishState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Localization {
    locale: Locale,
    overrides: HashMap<LocalizationKey, String>,
}

impl Localization {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::new(),
        }
    }

    /// Build from configuration.
    ///
    /// Unknown locale tags fall back to English and unknown override keys
    /// are skipped; both are logged.
    pub fn from_config(config: &LocalizationConfig) -> Self {
        let locale = Locale::from_tag(&config.locale).unwrap_or_else(|| {
            tracing::warn!(locale = %config.locale, "No built-in table for locale, using English");
            Locale::En
        });

        let mut localization = Self::new(locale);
        for (name, phrase) in &config.overrides {
            match name.parse::<LocalizationKey>() {
                Ok(key) => localization.set_override(key, phrase.clone()),
                Err(err) => tracing::warn!(error = %err, "Ignoring localization override"),
            }
        }
        localization
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_override(&mut self, key: LocalizationKey, phrase: impl Into<String>) {
        self.overrides.insert(key, phrase.into());
    }

    /// Display text for `key`.
    pub fn get(&self, key: LocalizationKey) -> &str {
        if let Some(phrase) = self.overrides.get(&key) {
            return phrase;
        }
        self.locale
            .phrase(key)
            .unwrap_or_else(|| tables::english(key))
    }

    /// Display text for a key given by name. Unknown names resolve to
    /// themselves.
    pub fn lookup<'a>(&'a self, name: &'a str) -> &'a str {
        match name.parse::<LocalizationKey>() {
            Ok(key) => self.get(key),
            Err(_) => {
                tracing::debug!(key = name, "Unknown localization key");
                name
            }
        }
    }

    pub fn state_label(&self, state: WishState) -> &str {
        self.get(match state {
            WishState::Pending => LocalizationKey::Pending,
            WishState::Approved => LocalizationKey::Approved,
            WishState::InReview => LocalizationKey::InReview,
            WishState::Planned => LocalizationKey::Planned,
            WishState::InProgress => LocalizationKey::InProgress,
            WishState::Implemented => LocalizationKey::Implemented,
            WishState::Completed => LocalizationKey::Completed,
            WishState::Rejected => LocalizationKey::Rejected,
        })
    }

    pub fn author_label(&self, author: CommentAuthor) -> &str {
        self.get(match author {
            CommentAuthor::Admin => LocalizationKey::Admin,
            CommentAuthor::User => LocalizationKey::User,
        })
    }
}
