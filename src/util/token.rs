//! Bearer token acquisition.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preview deployments live on a different site than the identity service, so
//! its session cookie never reaches them. After OAuth the service instead
//! appends `auth_token` to the return address. This module captures that value
//! once into the [`TokenStore`] and scrubs it from the address bar so a
//! refresh or a shared link does not leak it.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use super::environment::{EnvironmentReader, cookie_value, query_value, without_query_param};
use super::token_store::TokenStore;

/// Query parameter the identity service uses to hand over a fresh token.
pub const TOKEN_QUERY_PARAM: &str = "auth_token";
/// Cookie read (never written) as the last token source.
pub const TOKEN_COOKIE: &str = "auth_token";

/// Current bearer token, from the address, then storage, then the cookie.
///
/// A token found in the address is persisted and removed from the visible
/// address before it is returned, so a second call finds it in storage.
pub fn acquire_token(env: &impl EnvironmentReader, store: &impl TokenStore) -> Option<String> {
    if let Some(href) = env.href() {
        if let Some(token) = non_empty(query_value(&href, TOKEN_QUERY_PARAM)) {
            store.set(&token);
            if let Some(clean) = without_query_param(&href, TOKEN_QUERY_PARAM) {
                env.replace_href(&clean);
            }
            log::debug!("captured bearer token from landing address");
            return Some(token);
        }
    }

    if let Some(token) = non_empty(store.get()) {
        return Some(token);
    }

    non_empty(
        env.cookie_header()
            .and_then(|header| cookie_value(&header, TOKEN_COOKIE)),
    )
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}
