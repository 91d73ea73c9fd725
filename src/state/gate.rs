//! Staging access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preview and staging deployments must only render for staff. The gate
//! classifies the host, acquires the bearer token, and asks the identity
//! service once per mount whether the visitor holds the elevated permission.
//!
//! ```text
//! Checking --(host not restricted)--> UnrestrictedPassthrough
//! Checking --(granted)--------------> Authorized
//! Checking --(denied / failure)-----> Unauthorized
//! ```
//!
//! Every state other than `Checking` is terminal until the page reloads.
//!
//! ERROR HANDLING
//! ==============
//! Fails closed. Missing tokens, error statuses, transport failures and bad
//! payloads are all denials, and every denial erases the stored token.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::IdentityService;
use crate::net::types::MeResponse;
use crate::util::environment::EnvironmentReader;
use crate::util::token::acquire_token;
use crate::util::token_store::TokenStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    UnrestrictedPassthrough,
    Authorized,
    Unauthorized,
}

impl GateState {
    /// State at mount: passthrough on public hosts, otherwise checking.
    pub fn initial(env: &impl EnvironmentReader) -> Self {
        if env.is_restricted() { Self::Checking } else { Self::UnrestrictedPassthrough }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Checking)
    }

    /// Only a gate still checking asks the identity service.
    pub fn needs_verification(self) -> bool {
        matches!(self, Self::Checking)
    }

    /// Apply a verification result. Terminal states ignore it.
    #[must_use]
    pub fn settle(self, decision: AccessDecision) -> Self {
        match (self, decision) {
            (Self::Checking, AccessDecision::Granted) => Self::Authorized,
            (Self::Checking, AccessDecision::Denied(_)) => Self::Unauthorized,
            (settled, _) => settled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied(DenialReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenialReason {
    NoToken,
    NotAuthenticated,
    MissingPermission,
    ServiceFailure,
}

/// Whether a `/auth/me` reply unlocks a restricted deployment.
pub fn grants_access(me: &MeResponse, elevated_permission: &str) -> bool {
    me.authenticated && (me.is_super_admin || me.permissions.iter().any(|p| p == elevated_permission))
}

/// Decide whether the visitor may see this deployment.
///
/// Public hosts are granted and token-less visitors on restricted hosts are
/// denied, both without a network call. Otherwise exactly one request is made.
pub async fn verify_access(
    env: &impl EnvironmentReader,
    store: &impl TokenStore,
    identity: &impl IdentityService,
    elevated_permission: &str,
) -> AccessDecision {
    if !env.is_restricted() {
        return AccessDecision::Granted;
    }

    let decision = match acquire_token(env, store) {
        None => AccessDecision::Denied(DenialReason::NoToken),
        Some(token) => match identity.fetch_me(Some(&token)).await {
            Ok(me) if grants_access(&me, elevated_permission) => AccessDecision::Granted,
            Ok(me) if me.authenticated => AccessDecision::Denied(DenialReason::MissingPermission),
            Ok(_) => AccessDecision::Denied(DenialReason::NotAuthenticated),
            Err(e) => {
                log::warn!("staging access check failed: {e}");
                AccessDecision::Denied(DenialReason::ServiceFailure)
            }
        },
    };

    match decision {
        AccessDecision::Granted => log::debug!("staging access granted"),
        AccessDecision::Denied(reason) => {
            log::warn!("staging access denied: {reason:?}");
            store.remove();
        }
    }
    decision
}

/// Carry a mounted gate from `initial` to a terminal state. Terminal states
/// are returned as-is without touching the identity service.
pub async fn finish_gate(
    initial: GateState,
    env: &impl EnvironmentReader,
    store: &impl TokenStore,
    identity: &impl IdentityService,
    elevated_permission: &str,
) -> GateState {
    if !initial.needs_verification() {
        return initial;
    }
    initial.settle(verify_access(env, store, identity, elevated_permission).await)
}

/// Drive the gate from a fresh mount to a terminal state.
pub async fn run_gate(
    env: &impl EnvironmentReader,
    store: &impl TokenStore,
    identity: &impl IdentityService,
    elevated_permission: &str,
) -> GateState {
    finish_gate(GateState::initial(env), env, store, identity, elevated_permission).await
}

/// State to show once verification returns `next`. A gate that has been
/// unmounted (`alive` cleared) or already settled keeps `current`.
pub fn apply_if_mounted(alive: &AtomicBool, current: GateState, next: GateState) -> GateState {
    if alive.load(Ordering::Relaxed) && !current.is_terminal() { next } else { current }
}
