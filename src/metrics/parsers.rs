//! Utility functions for metrics processing

/// Parse a RouterOS quantity such as `53.4V`, `40mA` or `2.1W`
///
/// The unit suffix is optional; returns `None` for anything that is not a
/// finite number once the suffix is removed.
pub fn parse_quantity(value: &str, unit: &str) -> Option<f64> {
    let number = value.trim();
    let number = number.strip_suffix(unit).unwrap_or(number);
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}
