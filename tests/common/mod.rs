//! Shared test utilities and fake infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_backend;

use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::oneshot;
use uuid::Uuid;
use wishkit::config::{ApiConfig, Config, ConfigStore};
use wishkit::model::{Comment, Wish, WishState};
use wishkit::store::{Observer, StoreOptions, WishListSnapshot, WishStore};

pub use fake_api::FakeWishApi;

/// User the store acts for in tests.
pub fn me() -> Uuid {
    Uuid::from_u128(0x1111_1111_1111_1111_1111_1111_1111_1111)
}

pub fn someone_else() -> Uuid {
    Uuid::from_u128(0x2222_2222_2222_2222_2222_2222_2222_2222)
}

pub fn wish(title: &str, state: WishState, votes: u32) -> Wish {
    Wish {
        id: Uuid::new_v4(),
        user_uuid: someone_else(),
        title: title.to_string(),
        description: format!("{} please", title),
        state,
        vote_count: votes,
        voting_users: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        comment_list: None,
    }
}

pub fn comment(text: &str, is_admin: bool) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        text: text.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
        is_admin,
    }
}

/// `{"list": [...]}` body as served by the backend.
pub fn list_body<T: serde::Serialize>(items: &[T]) -> String {
    serde_json::json!({ "list": items }).to_string()
}

// -- Store helpers ------------------------------------------------------------

pub fn make_store(api: &Arc<FakeWishApi>) -> WishStore {
    WishStore::new(api.clone(), StoreOptions::new(me()))
}

/// Store pre-loaded with `wishes` through a regular fetch.
pub async fn loaded_store(api: &Arc<FakeWishApi>, wishes: Vec<Wish>) -> WishStore {
    let store = make_store(api);
    api.push_fetch(Ok(wishes));
    store.fetch_list().await.expect("initial fetch");
    store
}

/// Yield until the fake has seen `count` fetch calls.
pub async fn wait_for_fetch_calls(api: &FakeWishApi, count: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while api.fetch_calls() < count {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for {} fetch calls",
            count
        );
        tokio::task::yield_now().await;
    }
}

/// Observer that blocks inside the first notification it receives.
///
/// The returned receiver fires once the observer is blocked; sending on the
/// returned sender lets it continue.
pub fn blocking_observer() -> (Observer, oneshot::Receiver<()>, mpsc::Sender<()>) {
    let (entered_tx, entered_rx) = oneshot::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let entered = Mutex::new(Some(entered_tx));
    let release = Mutex::new(Some(release_rx));
    let observer: Observer = Arc::new(move |_: &WishListSnapshot| {
        let Some(release) = release.lock().take() else {
            return;
        };
        if let Some(entered) = entered.lock().take() {
            let _ = entered.send(());
        }
        let _ = release.recv();
    });
    (observer, entered_rx, release_tx)
}

/// Poll until `done` holds for the store's snapshot.
pub async fn wait_for_snapshot(store: &WishStore, done: impl Fn(&WishListSnapshot) -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !done(&store.snapshot()) {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for store snapshot"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

// -- Config helpers -----------------------------------------------------------

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-key".to_string()),
        request_timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn make_config_store(config: Config) -> ConfigStore {
    ConfigStore::new(config, PathBuf::from("/tmp/wishkit-test.toml"))
}
