#[cfg(test)]
#[path = "readout_test.rs"]
mod readout_test;

/// Shared readout state for the freehand surface.
///
/// Provided as an `RwSignal` context by the app root; the tracker host
/// writes readings into it, the readout label renders them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadoutState {
    /// Latest instantaneous velocity in CSS pixels per second, if any
    /// measurement has been made yet.
    pub velocity: Option<f64>,
}
