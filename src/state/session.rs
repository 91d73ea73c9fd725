//! Identity session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolved once by the composition root and shared through Leptos context.
//! Components read it to decide what to show (admin links, sign-in buttons);
//! it never blocks rendering. A signed-in user without any special permission
//! is a perfectly valid session here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use crate::config::AppKind;
use crate::net::api::IdentityService;
use crate::net::error::ApiError;
use crate::net::types::{Identity, MeResponse, Role};
use crate::util::environment::EnvironmentReader;
use crate::util::token::acquire_token;
use crate::util::token_store::TokenStore;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<Identity>,
    pub roles: Vec<Role>,
    pub permissions: BTreeSet<String>,
    pub is_super_admin: bool,
    pub loading: bool,
}

impl Session {
    /// Session as it exists before resolution finishes.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Session built from an identity-service reply. Anything short of an
    /// authenticated reply with a user yields a signed-out session.
    pub fn from_me(me: MeResponse) -> Self {
        let MeResponse { authenticated, user, roles, permissions, is_super_admin } = me;
        match user {
            Some(user) if authenticated => Self {
                user: Some(user),
                roles,
                permissions: permissions.into_iter().collect(),
                is_super_admin,
                loading: false,
            },
            _ => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Super admins hold every permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.is_super_admin || self.permissions.contains(permission)
    }

    /// Admin feature flag for `app`.
    pub fn is_admin(&self, app: AppKind) -> bool {
        self.is_super_admin || app.admin_permissions().iter().any(|p| self.permissions.contains(*p))
    }

    /// Discord global name, falling back to the username.
    pub fn display_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.display_name.as_deref().unwrap_or(&u.username))
    }
}

/// Outcome of the soft page guard around signed-in-only pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session still resolving; show a loader.
    Loading,
    Allow,
    /// Send the visitor elsewhere, replacing the current history entry.
    Redirect(&'static str),
}

/// Landing page for signed-out visitors.
pub const SIGNED_OUT_REDIRECT: &str = "/";
/// Where signed-in visitors without admin rights are sent from admin pages.
pub const NOT_ADMIN_REDIRECT: &str = "/profile";

/// Decide whether a signed-in-only page may render for `session`.
pub fn route_access(session: &Session, app: AppKind, require_admin: bool) -> RouteAccess {
    if session.loading {
        RouteAccess::Loading
    } else if !session.is_authenticated() {
        RouteAccess::Redirect(SIGNED_OUT_REDIRECT)
    } else if require_admin && !session.is_admin(app) {
        RouteAccess::Redirect(NOT_ADMIN_REDIRECT)
    } else {
        RouteAccess::Allow
    }
}

/// Ask the identity service who the visitor is.
///
/// An explicit "not authenticated" reply erases the stored token. Transport
/// and decode failures leave it alone: the service said nothing about it.
pub async fn resolve_session(
    env: &impl EnvironmentReader,
    store: &impl TokenStore,
    identity: &impl IdentityService,
) -> Session {
    let token = acquire_token(env, store);
    match identity.fetch_me(token.as_deref()).await {
        Ok(me) => {
            if !me.authenticated {
                store.remove();
            }
            let session = Session::from_me(me);
            log::debug!("session resolved: authenticated={}", session.is_authenticated());
            session
        }
        Err(ApiError::Unavailable) => Session::default(),
        Err(e) => {
            log::warn!("auth check failed: {e}");
            Session::default()
        }
    }
}
