//! Top-level pages, one per tab.

pub mod freehand;
pub mod ink;
