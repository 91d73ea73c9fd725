//! Persistent notice shown above content on staging deployments.

use leptos::prelude::*;

#[component]
pub fn StagingBanner() -> impl IntoView {
    view! {
        <div class="staging-banner" role="status">
            "STAGING ENVIRONMENT - Changes here won't affect production"
        </div>
    }
}
