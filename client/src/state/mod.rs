//! Application state shared through Leptos contexts.

pub mod readout;
