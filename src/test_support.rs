//! Shared fakes for flow tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::net::api::IdentityService;
use crate::net::error::ApiError;
use crate::net::types::{Identity, MeResponse};

/// Identity service that returns a fixed reply and records every call.
pub(crate) struct ScriptedIdentity {
    reply: Result<MeResponse, ApiError>,
    calls: Cell<usize>,
    last_token: RefCell<Option<String>>,
}

impl ScriptedIdentity {
    pub(crate) fn replying(me: MeResponse) -> Self {
        Self { reply: Ok(me), calls: Cell::new(0), last_token: RefCell::new(None) }
    }

    pub(crate) fn failing(err: ApiError) -> Self {
        Self { reply: Err(err), calls: Cell::new(0), last_token: RefCell::new(None) }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn last_token(&self) -> Option<String> {
        self.last_token.borrow().clone()
    }
}

#[async_trait(?Send)]
impl IdentityService for ScriptedIdentity {
    async fn fetch_me(&self, token: Option<&str>) -> Result<MeResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_token.borrow_mut() = token.map(str::to_owned);
        self.reply.clone()
    }
}

pub(crate) fn identity(id: &str, username: &str) -> Identity {
    Identity { id: id.to_owned(), username: username.to_owned(), display_name: None, avatar_ref: None }
}

pub(crate) fn me(authenticated: bool, permissions: &[&str], is_super_admin: bool) -> MeResponse {
    MeResponse {
        authenticated,
        user: authenticated.then(|| identity("123", "zezima")),
        roles: Vec::new(),
        permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
        is_super_admin,
    }
}
