//! Identification headers for backend requests.
//!
//! Builds the headers that tell the backend which host application and
//! which user a request belongs to.

use uuid::Uuid;

use super::credentials::CredentialStatus;
use super::types::ApiConfig;

/// Header name and value.
pub type AuthHeader = (String, String);

pub const API_KEY_HEADER: &str = "x-wishkit-api-key";
pub const USER_UUID_HEADER: &str = "x-wishkit-uuid";

/// Build the identification headers for a request made on behalf of `user`.
///
/// The API key header is omitted when no key is configured.
pub fn build_identity_headers(api: &ApiConfig, user: Uuid) -> Vec<AuthHeader> {
    let mut headers = Vec::with_capacity(2);

    if let CredentialStatus::Configured(key) = api.resolve_credential() {
        headers.push((API_KEY_HEADER.to_string(), key.expose().to_string()));
    }

    headers.push((USER_UUID_HEADER.to_string(), user.to_string()));
    headers
}
