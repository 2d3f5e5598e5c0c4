//! Pure formatting helpers for readout text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a velocity reading for the readout label.
///
/// One decimal place keeps the label width stable while the pointer moves;
/// an em dash stands in before the first measurement.
#[must_use]
pub fn format_velocity(reading: Option<f64>) -> String {
    match reading {
        Some(velocity) => format!("{velocity:.1} px/s"),
        None => "—".to_owned(),
    }
}
