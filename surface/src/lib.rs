//! Pointer-tracking and inking surfaces for the drawing demo.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the two drawing surfaces of the app: a hand-rolled tracker that follows a
//! single pointer, measures its instantaneous velocity, and marks the latest
//! position with a small circle, and an inking surface that delegates stroke
//! rendering entirely to the browser's 2D context with one fixed pen. The
//! host Leptos layer is responsible only for wiring DOM events into the
//! surfaces and displaying the velocity readings they emit.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`tracker`] | Testable [`tracker::TrackerCore`] and the browser-bound [`tracker::TrackerSurface`] |
//! | [`ink`] | Fixed-pen stroke delegation to `CanvasRenderingContext2d` |
//! | [`sample`] | Points and timestamped pointer samples |
//! | [`velocity`] | Instantaneous velocity estimation |
//! | [`marker`] | The last-position marker circle |
//! | [`pen`] | Pen style and pointer-type acceptance |
//! | [`render`] | Marker drawing against the 2D context |
//! | [`consts`] | Shared numeric and color constants |
//! | [`error`] | The surface error type |

pub mod consts;
pub mod error;
pub mod ink;
pub mod marker;
pub mod pen;
pub mod render;
pub mod sample;
pub mod tracker;
pub mod velocity;
