use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{build_identity_headers, ApiConfig, AuthHeader};
use crate::model::{Comment, Wish, WishDraft};

use super::error::ClientError;
use super::WishApi;

/// Backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    WishList,
    Vote,
    CreateWish,
    Comments(Uuid),
    CreateComment,
}

impl Route {
    pub fn method(&self) -> Method {
        match self {
            Route::WishList | Route::Comments(_) => Method::GET,
            Route::Vote | Route::CreateWish | Route::CreateComment => Method::POST,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::WishList => "/api/wish/list".to_string(),
            Route::Vote => "/api/wish/vote".to_string(),
            Route::CreateWish => "/api/wish/create".to_string(),
            Route::Comments(id) => format!("/api/wish/{}/comments", id),
            Route::CreateComment => "/api/comment/create".to_string(),
        }
    }

    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Route::WishList => "wish list",
            Route::Vote => "vote",
            Route::CreateWish => "create wish",
            Route::Comments(_) => "comment list",
            Route::CreateComment => "create comment",
        }
    }
}

#[derive(Deserialize)]
struct ListResponse<T> {
    list: Vec<T>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoteRequest {
    wish_id: Uuid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentRequest<'a> {
    wish_id: Uuid,
    description: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    reason: Option<String>,
}

/// reqwest-backed [`WishApi`].
pub struct HttpWishClient {
    client: Client,
    base_url: String,
    headers: Vec<AuthHeader>,
}

impl HttpWishClient {
    /// Build a client for `user` from the API section of the config.
    pub fn new(api: &ApiConfig, user: Uuid) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(api.request_timeout_seconds as u64))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            headers: build_identity_headers(api, user),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, route: Route) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, route.path());
        let mut builder = self.client.request(route.method(), url);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    /// Send and check the status, returning the raw body on success.
    async fn send(&self, route: Route, builder: RequestBuilder) -> Result<Vec<u8>, ClientError> {
        tracing::debug!(endpoint = route.name(), path = %route.path(), "Sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::transport(route.name(), e))?;

        let status = response.status();
        let body = read_body(route, response).await?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(
                endpoint = route.name(),
                status = status.as_u16(),
                message = %message,
                "Backend rejected request"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, route: Route) -> Result<T, ClientError> {
        let body = self.send(route, self.request(route)).await?;
        decode(route, &body)
    }
}

async fn read_body(route: Route, response: Response) -> Result<Vec<u8>, ClientError> {
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| ClientError::transport(route.name(), e))
}

fn decode<T: DeserializeOwned>(route: Route, body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|source| ClientError::Decode {
        context: route.name(),
        source,
    })
}

/// Extract a readable message from an error body.
fn error_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(message) = parsed.error.or(parsed.reason) {
            return message;
        }
    }
    let text = String::from_utf8_lossy(body);
    text.chars().take(200).collect()
}

#[async_trait]
impl WishApi for HttpWishClient {
    async fn fetch_wishes(&self) -> Result<Vec<Wish>, ClientError> {
        let response: ListResponse<Wish> = self.get_json(Route::WishList).await?;
        Ok(response.list)
    }

    async fn submit_vote(&self, wish_id: Uuid) -> Result<(), ClientError> {
        let route = Route::Vote;
        let builder = self.request(route).json(&VoteRequest { wish_id });
        self.send(route, builder).await?;
        Ok(())
    }

    async fn submit_wish(&self, draft: &WishDraft) -> Result<(), ClientError> {
        let route = Route::CreateWish;
        let builder = self.request(route).json(draft);
        self.send(route, builder).await?;
        Ok(())
    }

    async fn fetch_comments(&self, wish_id: Uuid) -> Result<Vec<Comment>, ClientError> {
        let response: ListResponse<Comment> = self.get_json(Route::Comments(wish_id)).await?;
        Ok(response.list)
    }

    async fn submit_comment(&self, wish_id: Uuid, text: &str) -> Result<Comment, ClientError> {
        let route = Route::CreateComment;
        let builder = self.request(route).json(&CommentRequest {
            wish_id,
            description: text,
        });
        let body = self.send(route, builder).await?;
        decode(route, &body)
    }
}
