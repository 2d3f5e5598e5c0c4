//! UI components.

pub mod ink_host;
pub mod tab_bar;
pub mod tracker_host;
pub mod velocity_readout;
