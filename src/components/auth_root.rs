//! Composition root for auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the top of each app. Provides the [`AuthConfig`] and a
//! `RwSignal<Session>` to every descendant, and starts the single identity
//! lookup for this page load. Sign-in flows that change the user's identity
//! mid-page pull a [`SessionRefresh`] from context to look it up again.

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::state::session::Session;

#[component]
pub fn AuthRoot(config: AuthConfig, children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::pending());
    let refresh_config = config.clone();
    let refresh = SessionRefresh(Callback::new(move |()| refresh_session(session, &refresh_config)));
    refresh.run();

    provide_context(config);
    provide_context(session);
    provide_context(refresh);

    children()
}

/// Handle for re-running the identity lookup on explicit user action.
#[derive(Clone, Copy)]
pub struct SessionRefresh(Callback<()>);

impl SessionRefresh {
    pub fn run(&self) {
        self.0.run(());
    }
}

/// Re-resolve the session against the identity service.
///
/// Outside the browser the session stays pending.
fn refresh_session(session: RwSignal<Session>, config: &AuthConfig) {
    #[cfg(feature = "csr")]
    {
        use crate::net::api::HttpIdentityService;
        use crate::state::session::resolve_session;
        use crate::util::environment::BrowserEnvironment;
        use crate::util::token_store::LocalTokenStore;

        let service = HttpIdentityService::new(config);
        session.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let resolved = resolve_session(&BrowserEnvironment, &LocalTokenStore, &service).await;
            let _ = session.try_set(resolved);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, config);
    }
}
