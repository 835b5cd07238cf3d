// crates/countrydex-core/src/display.rs
//! Formatting helpers shared by every front-end.

/// Placeholder rendered for any missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// The value itself, or [`NOT_AVAILABLE`] when missing or blank.
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// Comma-joined list, or [`NOT_AVAILABLE`] when empty.
pub fn join_or_placeholder<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Group digits in thousands: `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Population for display; a missing value is never shown as `0`.
pub fn format_population(population: Option<u64>) -> String {
    population
        .map(group_thousands)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Coordinates for display, e.g. `"51.00, 9.00"`.
pub fn format_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> String {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) => format!("{lat:.2}, {lng:.2}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_population_is_placeholder() {
        assert_eq!(format_population(None), "N/A");
        assert_eq!(format_population(Some(0)), "0");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(83_240_525), "83,240,525");
    }

    #[test]
    fn blanks_are_placeholders() {
        assert_eq!(or_placeholder(None), "N/A");
        assert_eq!(or_placeholder(Some("  ")), "N/A");
        assert_eq!(or_placeholder(Some("Berlin")), "Berlin");
        assert_eq!(join_or_placeholder::<String>(&[]), "N/A");
        assert_eq!(join_or_placeholder(&["AUT", "BEL"]), "AUT, BEL");
    }
}
