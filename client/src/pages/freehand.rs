//! Freehand page — the hand-rolled tracker with its velocity readout.

use leptos::prelude::*;

use crate::components::tracker_host::TrackerHost;
use crate::components::velocity_readout::VelocityReadout;

/// Freehand drawing page. The readout floats over the surface, top-left.
#[component]
pub fn FreehandPage() -> impl IntoView {
    view! {
        <div class="freehand-page">
            <div class="freehand-page__readout">
                <VelocityReadout/>
            </div>
            <TrackerHost/>
        </div>
    }
}
