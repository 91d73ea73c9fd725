//! REST helpers for the identity service and the clan data API.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the identity service's own cookie travels too.
//! Native builds: calls report [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`]. Callers decide the policy:
//! the staging gate treats any error as a denial, the soft session as
//! "signed out".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{ClanMember, MeResponse, MemberEnvelope};
use crate::config::AuthConfig;
use crate::util::token_store::TokenStore;

/// The remote "who am I" authority.
#[async_trait(?Send)]
pub trait IdentityService {
    /// `GET /auth/me`, attaching `token` as a bearer credential when present.
    async fn fetch_me(&self, token: Option<&str>) -> Result<MeResponse, ApiError>;
}

/// [`IdentityService`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpIdentityService {
    me_url: String,
}

impl HttpIdentityService {
    pub fn new(config: &AuthConfig) -> Self {
        Self { me_url: config.me_url() }
    }
}

#[async_trait(?Send)]
impl IdentityService for HttpIdentityService {
    async fn fetch_me(&self, token: Option<&str>) -> Result<MeResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::get(&self.me_url)
                .credentials(web_sys::RequestCredentials::Include);
            if let Some(token) = token {
                request = request.header("Authorization", &bearer(token));
            }
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            parse_me_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.me_url, token);
            Err(ApiError::Unavailable)
        }
    }
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Headers for data API calls: JSON content type plus the stored bearer
/// token, if any.
pub fn auth_headers(store: &impl TokenStore) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if let Some(token) = store.get().filter(|t| !t.is_empty()) {
        headers.push(("Authorization", bearer(&token)));
    }
    headers
}

/// Decode a `/auth/me` reply.
///
/// # Errors
///
/// Non-2xx statuses and bodies that are not a valid `MeResponse`.
pub fn parse_me_response(status: u16, body: &str) -> Result<MeResponse, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a `/clan/member/{id}` reply. A 404 or a `null` member means the
/// Discord account has no linked game account.
///
/// # Errors
///
/// Other non-2xx statuses and malformed bodies.
pub fn parse_member_response(status: u16, body: &str) -> Result<Option<ClanMember>, ApiError> {
    if status == 404 {
        return Ok(None);
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    let envelope: MemberEnvelope = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.member)
}

/// Fetch the clan roster entry linked to a Discord user.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, an unexpected status, or a
/// malformed body.
pub async fn fetch_linked_member(
    config: &AuthConfig,
    store: &impl TokenStore,
    discord_id: &str,
) -> Result<Option<ClanMember>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut request = gloo_net::http::Request::get(&config.member_url(discord_id))
            .credentials(web_sys::RequestCredentials::Include);
        for (name, value) in auth_headers(store) {
            request = request.header(name, &value);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_member_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, store, discord_id);
        Err(ApiError::Unavailable)
    }
}
