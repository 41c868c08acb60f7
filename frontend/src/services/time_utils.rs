use chrono::DateTime;

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Format a wire timestamp for display (e.g. "Mar 2, 2026 09:00").
/// Falls back to the raw string if it does not parse.
pub fn format_datetime(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// Time-of-day range for a class session (e.g. "09:00 - 10:00").
pub fn format_time_range(start: &str, end: &str) -> String {
    match (
        DateTime::parse_from_rfc3339(start),
        DateTime::parse_from_rfc3339(end),
    ) {
        (Ok(start), Ok(end)) => format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")),
        _ => format!("{} - {}", start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-03-02T09:00:00Z"), "Mar 2, 2026 09:00");
    }

    #[wasm_bindgen_test]
    fn test_format_datetime_falls_back_to_raw_value() {
        assert_eq!(format_datetime("soon"), "soon");
    }

    #[wasm_bindgen_test]
    fn test_format_time_range() {
        assert_eq!(
            format_time_range("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
            "09:00 - 10:00"
        );
    }
}
