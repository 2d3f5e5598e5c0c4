//! Top tab strip switching between the two drawing surfaces.

use leptos::prelude::*;
use leptos_router::components::A;

/// Tab bar with one link per surface. The router marks the active link
/// with `aria-current="page"` for styling.
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <nav class="tab-bar">
            <A href="/" exact=true>"Freehand"</A>
            <A href="/ink">"Ink"</A>
        </nav>
    }
}
