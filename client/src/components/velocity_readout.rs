//! Velocity readout label.

use leptos::prelude::*;

use crate::state::readout::ReadoutState;
use crate::util::format::format_velocity;

/// Shows the latest instantaneous velocity reading, or a dash before the
/// first measurement.
#[component]
pub fn VelocityReadout() -> impl IntoView {
    let readout = expect_context::<RwSignal<ReadoutState>>();
    let label = move || format_velocity(readout.get().velocity);

    view! { <span class="velocity-readout">{label}</span> }
}
