//! Soft page guard for signed-in-only pages.
//!
//! Unlike the staging gate this never contacts the identity service itself
//! and never erases the token. It only reads the session published by
//! `AuthRoot` and sends visitors away when the page is not for them.

use leptos::prelude::*;

use crate::components::redirect::replace_with_path;
use crate::config::AuthConfig;
use crate::state::session::{RouteAccess, Session, route_access};

/// Render `children` only for a signed-in session, and only for admins of
/// this app when `require_admin` is set.
#[component]
pub fn RequireSession(#[prop(optional)] require_admin: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let app = expect_context::<AuthConfig>().app;
    let access = Memo::new(move |_| session.with(|s| route_access(s, app, require_admin)));

    Effect::new(move || {
        if let RouteAccess::Redirect(path) = access.get() {
            replace_with_path(path);
        }
    });

    move || match access.get() {
        RouteAccess::Allow => children().into_any(),
        RouteAccess::Loading | RouteAccess::Redirect(_) => view! { <SessionLoading/> }.into_any(),
    }
}

#[component]
fn SessionLoading() -> impl IntoView {
    view! {
        <div class="gate-screen">
            <span class="gate-screen__spinner" aria-hidden="true"></span>
        </div>
    }
}
