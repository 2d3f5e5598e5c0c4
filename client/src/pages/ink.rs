//! Ink page — the platform-backed inking surface.

use leptos::prelude::*;

use crate::components::ink_host::InkHost;

/// Inking page: one fixed pen, stroke rendering delegated to the browser.
#[component]
pub fn InkPage() -> impl IntoView {
    view! {
        <div class="ink-page">
            <InkHost/>
        </div>
    }
}
