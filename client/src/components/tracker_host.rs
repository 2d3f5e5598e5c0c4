//! Bridge component between the Leptos UI and the imperative tracker
//! surface.
//!
//! Mounts a `<canvas>` element. On hydration this creates a
//! [`surface::tracker::TrackerSurface`], maps pointer events into it, and
//! publishes the velocity readings it hands back into [`ReadoutState`].

use leptos::prelude::*;

use crate::state::readout::ReadoutState;

#[cfg(feature = "hydrate")]
use crate::util::pointer::pointer_sample;
#[cfg(feature = "hydrate")]
use crate::util::viewport::canvas_metrics;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use surface::error::SurfaceError;
#[cfg(feature = "hydrate")]
use surface::tracker::TrackerSurface;

/// Tracker host — the freehand surface with velocity reporting.
///
/// The surface lives in an `Rc<RefCell<…>>` owned by this component; it is
/// only ever touched from the UI thread's event handlers.
#[component]
pub fn TrackerHost() -> impl IntoView {
    let _readout = expect_context::<RwSignal<ReadoutState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "hydrate")]
    let surface = Rc::new(RefCell::new(None::<TrackerSurface>));

    #[cfg(feature = "hydrate")]
    {
        let surface = Rc::clone(&surface);
        let canvas_ref_mount = canvas_ref;
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if surface.borrow().is_some() {
                return;
            }
            let (width, height, dpr) = canvas_metrics(&canvas);
            match TrackerSurface::new(canvas) {
                Ok(mut instance) => {
                    instance.set_viewport(width, height, dpr);
                    *surface.borrow_mut() = Some(instance);
                }
                Err(err) => log::error!("tracker surface init failed: {err}"),
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let surface = Rc::clone(&surface);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                    // Pick up window resizes at gesture start; the marker
                    // redraw repaints the whole surface anyway.
                    if let Some(surface) = surface.borrow_mut().as_mut() {
                        let (width, height, dpr) = canvas_metrics(&canvas);
                        surface.set_viewport(width, height, dpr);
                    }
                }
                if let Some(surface) = surface.borrow_mut().as_mut() {
                    publish(surface.pointer_down(pointer_sample(&ev)), _readout);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let surface = Rc::clone(&surface);
            move |ev: leptos::ev::PointerEvent| {
                // pointermove also fires on hover; only a held primary
                // button counts as contact.
                if ev.buttons() & 1 == 0 {
                    return;
                }
                if let Some(surface) = surface.borrow_mut().as_mut() {
                    publish(surface.pointer_move(pointer_sample(&ev)), _readout);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let surface = Rc::clone(&surface);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                if let Some(surface) = surface.borrow_mut().as_mut() {
                    publish(surface.pointer_up(pointer_sample(&ev)), _readout);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        // Touch drags on the surface must not scroll the page.
        ev.prevent_default();
    };

    view! {
        <canvas
            node_ref=canvas_ref
            class="tracker-host"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:touchstart=on_touch_start
        >
            "Your browser does not support canvas."
        </canvas>
    }
}

/// Push a handler result into the readout; log and continue on failure.
#[cfg(feature = "hydrate")]
fn publish(result: Result<Option<f64>, SurfaceError>, readout: RwSignal<ReadoutState>) {
    match result {
        Ok(Some(velocity)) => readout.update(|r| r.velocity = Some(velocity)),
        Ok(None) => {}
        Err(err) => log::error!("tracker surface: {err}"),
    }
}
