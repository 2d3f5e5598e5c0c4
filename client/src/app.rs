//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::tab_bar::TabBar;
use crate::pages::{freehand::FreehandPage, ink::InkPage};
use crate::state::readout::ReadoutState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared readout state and sets up the two-tab routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let readout = RwSignal::new(ReadoutState::default());
    provide_context(readout);

    view! {
        <Stylesheet id="leptos" href="/pkg/inkpad.css"/>
        <Title text="Inkpad"/>

        <Router>
            <TabBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=FreehandPage/>
                    <Route path=StaticSegment("ink") view=InkPage/>
                </Routes>
            </main>
        </Router>
    }
}
