use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::client::{ClientError, HttpWishClient};
use crate::config::{ColorScheme, ConfigError, ConfigStore};
use crate::error::WishError;
use crate::i18n::Localization;
use crate::model::{WishDraft, WishFilter};
use crate::store::{FetchOutcome, StoreOptions, SubscriptionId, WishListSnapshot, WishStore};
use crate::ui::mvi::Reducer;
use crate::ui::wishlist::intent::WishlistIntent;
use crate::ui::wishlist::presenter::{present, WishlistScreen};
use crate::ui::wishlist::reducer::WishlistReducer;
use crate::ui::wishlist::state::WishlistState;

/// Takes the current state out of the mutex, runs the reducer, stores the result.
macro_rules! dispatch_mvi {
    ($state:expr, $reducer:ty, $intent:expr) => {{
        let mut guard = $state.lock();
        *guard = <$reducer>::reduce(std::mem::take(&mut *guard), $intent);
    }};
}

/// Wires a [`WishStore`] to the list view state.
///
/// Store notifications arrive as [`WishlistIntent::SnapshotChanged`];
/// user actions go through the methods below.
pub struct WishlistController {
    store: WishStore,
    config: ConfigStore,
    localization: RwLock<Localization>,
    state: Arc<Mutex<WishlistState>>,
    subscription: SubscriptionId,
}

impl WishlistController {
    pub fn new(store: WishStore, config: ConfigStore) -> Self {
        let state = Arc::new(Mutex::new(WishlistState::default()));

        // Subscribe before reading the initial snapshot so no change is
        // missed in between; the reducer drops whichever copy is older.
        let observed = state.clone();
        let subscription = store.subscribe(Arc::new(move |snapshot: &WishListSnapshot| {
            dispatch_mvi!(observed, WishlistReducer, WishlistIntent::SnapshotChanged(snapshot.clone()));
        }));
        dispatch_mvi!(state, WishlistReducer, WishlistIntent::SnapshotChanged(store.snapshot()));

        let localization = RwLock::new(Localization::from_config(&config.get().localization));

        Self {
            store,
            config,
            localization,
            state,
            subscription,
        }
    }

    /// Build the HTTP client and store from configuration.
    pub fn connect(config: ConfigStore) -> Result<Self, ClientError> {
        let current = config.get();
        let user = current.user.resolve_uuid();
        let client = HttpWishClient::new(&current.api, user)?;
        let options = StoreOptions {
            user,
            email_field: current.email_field,
        };
        tracing::info!(user = %user, base_url = %client.base_url(), "Wishlist session started");
        Ok(Self::new(WishStore::new(Arc::new(client), options), config))
    }

    pub fn store(&self) -> &WishStore {
        &self.store
    }

    pub fn user(&self) -> Uuid {
        self.store.user()
    }

    pub fn state(&self) -> WishlistState {
        self.state.lock().clone()
    }

    pub fn dispatch(&self, intent: WishlistIntent) {
        dispatch_mvi!(self.state, WishlistReducer, intent);
    }

    pub fn select(&self, filter: WishFilter) {
        self.dispatch(WishlistIntent::Select(filter));
    }

    /// User-initiated refresh; the refreshing flag is set while any runs.
    pub async fn refresh(&self) -> Result<FetchOutcome, WishError> {
        self.dispatch(WishlistIntent::RefreshStarted);
        let result = self.store.fetch_list().await;
        self.dispatch(WishlistIntent::RefreshFinished);
        result
    }

    pub async fn upvote(&self, wish_id: Uuid) -> Result<(), WishError> {
        self.store.upvote(wish_id).await
    }

    pub fn open_create_sheet(&self) {
        self.dispatch(WishlistIntent::OpenCreateSheet);
    }

    /// Submit the create form. The sheet closes only on success.
    pub async fn submit_wish(&self, draft: WishDraft) -> Result<(), WishError> {
        self.store.create_wish_draft(draft).await?;
        self.dispatch(WishlistIntent::CloseCreateSheet);
        Ok(())
    }

    /// Localized text to show for `err`.
    pub fn error_message(&self, err: &WishError) -> String {
        self.localization.read().get(err.localization_key()).to_string()
    }

    pub fn screen(&self, scheme: ColorScheme) -> WishlistScreen {
        let state = self.state();
        let config = self.config.get();
        let localization = self.localization.read();
        present(&state, &config, &localization, self.store.user(), scheme)
    }

    /// Re-read the config file and rebuild the localization table.
    pub fn reload_config(&self) -> Result<(), ConfigError> {
        self.config.reload()?;
        *self.localization.write() = Localization::from_config(&self.config.get().localization);
        Ok(())
    }
}

impl Drop for WishlistController {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
