//! Top navigation with the account area and the admin link.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::components::redirect::redirect_to;
use crate::config::{AppKind, AuthConfig};
use crate::state::session::Session;
use crate::util::environment::origin;

/// Navigation bar. The admin link is a feature flag driven by the session;
/// it hides the link but does not protect the page behind it.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<AuthConfig>();
    let linked_rsn = RwSignal::new(None::<String>);
    let user_id = Memo::new(move |_| session.with(|s| s.user.as_ref().map(|u| u.id.clone())));

    #[cfg(feature = "csr")]
    {
        use crate::net::api::fetch_linked_member;
        use crate::util::token_store::LocalTokenStore;

        let member_config = config.clone();
        Effect::new(move || {
            let Some(requested) = user_id.get() else {
                linked_rsn.set(None);
                return;
            };
            let member_config = member_config.clone();
            leptos::task::spawn_local(async move {
                let result = fetch_linked_member(&member_config, &LocalTokenStore, &requested).await;
                let current = user_id.try_get_untracked().flatten();
                if !still_current(current.as_deref(), &requested) {
                    return;
                }
                match result {
                    Ok(member) => {
                        let _ = linked_rsn.try_set(member.map(|m| m.rsn));
                    }
                    Err(e) => log::warn!("linked member lookup failed: {e}"),
                }
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = user_id;

    let app = config.app;
    let is_admin = move || session.with(|s| s.is_admin(app));
    let brand = match app {
        AppKind::Site => "Iron Forged",
        AppKind::Events => "Ironforged Events",
    };

    view! {
        <nav class="site-nav">
            <a href="/" class="site-nav__brand">{brand}</a>
            <Show when=is_admin>
                <a href="/admin" class="site-nav__link">"Admin"</a>
            </Show>
            <div class="site-nav__account">
                {move || {
                    let current = session.get();
                    if current.loading {
                        return view! { <span class="site-nav__muted">"Loading..."</span> }.into_any();
                    }
                    let Some(name) = current.display_name().map(str::to_owned) else {
                        let login_config = config.clone();
                        return view! {
                            <button
                                class="site-nav__button site-nav__button--primary"
                                on:click=move |_| redirect_to(|here| login_config.login_url(here))
                            >
                                "Login with Discord"
                            </button>
                        }
                            .into_any();
                    };
                    let logout_config = config.clone();
                    view! {
                        <span class="site-nav__user">{name}</span>
                        {move || linked_rsn.get().map(|rsn| view! { <span class="site-nav__rsn">{rsn}</span> })}
                        <button
                            class="site-nav__button"
                            on:click=move |_| {
                                redirect_to(|here| {
                                    let home = origin(here).unwrap_or_else(|| here.to_owned());
                                    logout_config.logout_url(&home)
                                });
                            }
                        >
                            "Logout"
                        </button>
                    }
                        .into_any()
                }}
            </div>
        </nav>
    }
}

/// A linked-member lookup for `requested` may only land while that user is
/// still the one signed in.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn still_current(current: Option<&str>, requested: &str) -> bool {
    current == Some(requested)
}
