//! Display surface state

/// What the host renders: the live expression, the transient result line and
/// the transient easter indicator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Live expression buffer text
    pub expression: String,
    /// Transient result or failure message; empty when nothing is shown
    pub result: String,
    /// Whether the easter indicator is visible
    pub easter_visible: bool,
}

impl DisplayState {
    /// Display for a freshly cleared calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            expression: crate::accumulator::EMPTY_BUFFER.to_string(),
            result: String::new(),
            easter_visible: false,
        }
    }

    /// True if a result message is currently shown
    #[must_use]
    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }
}

/// Formats a number for display (removes trailing zeros)
#[must_use]
pub fn format_number(val: f64) -> String {
    if val.is_nan() {
        "NaN".to_string()
    } else if val.is_infinite() {
        let name = if val > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if val == 0.0 {
        "0".to_string()
    } else if val.fract() == 0.0 && val.abs() < 1e15 {
        format!("{val:.0}")
    } else {
        let fixed = format!("{val:.10}");
        let fixed = fixed.trim_end_matches('0').trim_end_matches('.');
        if loses_precision(fixed, val) {
            format!("{val:e}")
        } else {
            fixed.to_string()
        }
    }
}

/// Relative error a ten-place rendering may introduce before it is
/// replaced by scientific notation
const MAX_RELATIVE_ERROR: f64 = 1e-9;

fn loses_precision(fixed: &str, val: f64) -> bool {
    fixed
        .parse::<f64>()
        .map_or(true, |shown| ((shown - val) / val).abs() > MAX_RELATIVE_ERROR)
}
