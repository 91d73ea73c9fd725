//! Root application components.
//!
//! Each app wires the same three layers: [`AuthRoot`] resolves the session,
//! [`StagingGate`] blocks staging hosts, and the page content sits inside.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::auth_root::AuthRoot;
use crate::components::nav_bar::NavBar;
use crate::components::staging_gate::StagingGate;
use crate::config::{AppKind, AuthConfig};

/// Clan site root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = AuthConfig::from_build_env(AppKind::Site);

    view! {
        <Stylesheet id="leptos" href="/pkg/ironforged.css"/>
        <Title text="Iron Forged"/>

        <AuthRoot config=config>
            <StagingGate>
                <NavBar/>
                <main class="site-main">
                    <h1>"Iron Forged"</h1>
                    <p>"Old School RuneScape clan."</p>
                </main>
            </StagingGate>
        </AuthRoot>
    }
}

/// Tile-events app root.
#[component]
pub fn EventsApp() -> impl IntoView {
    provide_meta_context();
    let config = AuthConfig::from_build_env(AppKind::Events);

    view! {
        <Stylesheet id="leptos" href="/pkg/ironforged-events.css"/>
        <Title text="Ironforged Events"/>

        <AuthRoot config=config>
            <StagingGate>
                <NavBar/>
                <main class="site-main">
                    <h1>"Ironforged Events"</h1>
                    <p>"Snake-style tile progression events for OSRS clans."</p>
                </main>
            </StagingGate>
        </AuthRoot>
    }
}
