//! Bridge component between the Leptos UI and the inking surface.
//!
//! Mounts a `<canvas>` element. On hydration this creates a
//! [`surface::ink::InkSurface`] with the fixed default pen and maps pointer
//! events into stroke calls. Stroke rendering itself is the 2D context's.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::pointer::pointer_point;
#[cfg(feature = "hydrate")]
use crate::util::viewport::canvas_metrics;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use surface::error::SurfaceError;
#[cfg(feature = "hydrate")]
use surface::ink::InkSurface;
#[cfg(feature = "hydrate")]
use surface::pen::PenStyle;

/// Ink host — the fixed-pen drawing surface with a clear button.
#[component]
pub fn InkHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "hydrate")]
    let surface = Rc::new(RefCell::new(None::<InkSurface>));

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
            match InkSurface::new(canvas, PenStyle::default()) {
                Ok(mut instance) => {
                    instance.set_viewport(width, height, dpr);
                    *surface.borrow_mut() = Some(instance);
                }
                Err(err) => log::error!("ink surface init failed: {err}"),
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
                }
                if let Some(surface) = surface.borrow_mut().as_mut() {
                    if !surface.pen().accepts(&ev.pointer_type()) {
                        return;
                    }
                    log_err(surface.begin_stroke(pointer_point(&ev)));
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
                if ev.buttons() & 1 == 0 {
                    return;
                }
                // extend_stroke no-ops when no stroke is active (the pen
                // was rejected, or the pointer went down off-surface).
                if let Some(surface) = surface.borrow_mut().as_mut() {
                    log_err(surface.extend_stroke(pointer_point(&ev)));
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
                    surface.end_stroke();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        ev.prevent_default();
    };

    let on_clear = {
        #[cfg(feature = "hydrate")]
        {
            let surface = Rc::clone(&surface);
            move |_ev: leptos::ev::MouseEvent| {
                if let Some(surface) = surface.borrow_mut().as_mut() {
                    log_err(surface.clear());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="ink-host">
            <button class="ink-host__clear" on:click=on_clear>
                "Clear"
            </button>
            <canvas
                node_ref=canvas_ref
                class="ink-host__canvas"
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:touchstart=on_touch_start
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}

/// Log a rejected canvas call and continue; ink strokes are best-effort.
#[cfg(feature = "hydrate")]
fn log_err(result: Result<(), SurfaceError>) {
    if let Err(err) = result {
        log::error!("ink surface: {err}");
    }
}
