//! Access gate wrapping protected content on staging deployments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders one of four screens from [`GateState`]: a loading indicator while
//! checking, the children untouched on public hosts, the children under a
//! [`StagingBanner`] once authorized, or a sign-in prompt otherwise.
//!
//! The host is classified while the component is created, so public hosts
//! render their children on the first frame. Restricted hosts verify once;
//! a result that arrives after the gate unmounts is dropped.

use leptos::prelude::*;

use crate::components::redirect::redirect_to;
use crate::components::staging_banner::StagingBanner;
use crate::config::AuthConfig;
use crate::state::gate::GateState;

#[component]
pub fn StagingGate(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<AuthConfig>();
    #[cfg(feature = "csr")]
    let initial = GateState::initial(&crate::util::environment::BrowserEnvironment);
    #[cfg(not(feature = "csr"))]
    let initial = GateState::Checking;
    let state = RwSignal::new(initial);

    #[cfg(feature = "csr")]
    {
        if initial.needs_verification() {
            use std::sync::Arc;
            use std::sync::atomic::{AtomicBool, Ordering};

            use crate::net::api::HttpIdentityService;
            use crate::state::gate::{apply_if_mounted, finish_gate};
            use crate::util::environment::BrowserEnvironment;
            use crate::util::token_store::LocalTokenStore;

            let alive = Arc::new(AtomicBool::new(true));
            let alive_task = alive.clone();
            let service = HttpIdentityService::new(&config);
            let permission = config.elevated_permission.clone();
            leptos::task::spawn_local(async move {
                let next = finish_gate(initial, &BrowserEnvironment, &LocalTokenStore, &service, &permission).await;
                if !alive_task.load(Ordering::Relaxed) {
                    log::debug!("staging gate unmounted before verification finished");
                }
                let _ = state.try_update(|s| *s = apply_if_mounted(&alive_task, *s, next));
            });
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }
    }

    view! {
        {move || match state.get() {
            GateState::Checking => view! { <GateLoading/> }.into_any(),
            GateState::UnrestrictedPassthrough => children().into_any(),
            GateState::Authorized => {
                view! {
                    <StagingBanner/>
                    <div class="staging-offset">{children()}</div>
                }
                    .into_any()
            }
            GateState::Unauthorized => view! { <SignInPrompt config=config.clone()/> }.into_any(),
        }}
    }
}

#[component]
fn GateLoading() -> impl IntoView {
    view! {
        <div class="gate-screen">
            <span class="gate-screen__spinner" aria-hidden="true"></span>
            <span class="gate-screen__text">"Checking access..."</span>
        </div>
    }
}

#[component]
fn SignInPrompt(config: AuthConfig) -> impl IntoView {
    let on_sign_in = move |_| {
        redirect_to(|here| config.login_url(here));
    };

    view! {
        <div class="gate-screen">
            <div class="gate-card">
                <h1>"Staging Environment"</h1>
                <p class="gate-card__subtitle">
                    "This deployment is restricted. Sign in with an account that has staging access."
                </p>
                <button class="gate-card__button" on:click=on_sign_in>
                    "Sign in with Discord"
                </button>
            </div>
        </div>
    }
}
