//! Date helper functions
//!
//! Post dates in the manifest are compact `YYYYMMDD` strings. Anything that
//! does not look like one is shown as-is.

use chrono::Month;

/// Split a compact `YYYYMMDD` date into its parts
fn split_compact(date: &str) -> Option<(&str, &str, &str)> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&date[..4], &date[4..6], &date[6..]))
}

/// Whether a string is a compact `YYYYMMDD` date
pub fn is_compact_date(date: &str) -> bool {
    split_compact(date).is_some()
}

/// Format a compact date for the `datetime` attribute of a `<time>` element
///
/// # Examples
/// ```
/// use scriptorium::helpers::format_datetime;
/// assert_eq!(format_datetime("20260222"), "2026-02-22");
/// assert_eq!(format_datetime("invalid"), "invalid");
/// ```
pub fn format_datetime(date: &str) -> String {
    match split_compact(date) {
        Some((year, month, day)) => format!("{}-{}-{}", year, month, day),
        None => date.to_string(),
    }
}

/// Format a compact date for display (like "Feb 22, 2026")
///
/// An out-of-range month falls back to the `YYYY-MM-DD` form.
pub fn display_date(date: &str) -> String {
    let Some((year, month, day)) = split_compact(date) else {
        return date.to_string();
    };

    let month_name = month
        .parse::<u8>()
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name());

    match (month_name, day.parse::<u32>()) {
        (Some(name), Ok(day)) => format!("{} {}, {}", &name[..3], day, year),
        _ => format!("{}-{}-{}", year, month, day),
    }
}

/// Generate a `<time>` HTML element for a compact date
pub fn time_tag(date: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        super::html_escape(&format_datetime(date)),
        super::html_escape(&display_date(date))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("20260222"), "2026-02-22");
        assert_eq!(format_datetime("20260110"), "2026-01-10");
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime("2026022"), "2026022");
        assert_eq!(format_datetime("abcdefgh"), "abcdefgh");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("20260222"), "Feb 22, 2026");
        assert_eq!(display_date("20260110"), "Jan 10, 2026");
        assert_eq!(display_date("20261231"), "Dec 31, 2026");
        assert_eq!(display_date("20260901"), "Sep 1, 2026");
        assert_eq!(display_date("invalid"), "invalid");
    }

    #[test]
    fn test_display_date_bad_month() {
        assert_eq!(display_date("20261305"), "2026-13-05");
        assert_eq!(display_date("20260005"), "2026-00-05");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag("20260222"),
            r#"<time datetime="2026-02-22">Feb 22, 2026</time>"#
        );
        assert_eq!(
            time_tag("<bad>"),
            r#"<time datetime="&lt;bad&gt;">&lt;bad&gt;</time>"#
        );
    }
}
