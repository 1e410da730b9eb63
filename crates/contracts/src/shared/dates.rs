//! Date conversions between the backend's ISO timestamps, the `DD/MM/YYYY`
//! display form, and `<input type="date">` values.

use chrono::NaiveDate;

/// Placeholder for an absent date, used instead of null throughout the UI.
pub const MISSING_DATE: &str = "--";

/// Format an ISO/RFC3339 timestamp (or bare `YYYY-MM-DD`) as `DD/MM/YYYY`.
///
/// Returns the missing-date sentinel when the input cannot be read as a
/// date, so list rendering never fails on malformed backend data.
pub fn format_display_date(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => MISSING_DATE.to_string(),
    }
}

/// Parse a `DD/MM/YYYY` display string back into a calendar date.
///
/// Splits on `/` the way the display format is built; anything that is not
/// three numeric fields forming a valid calendar date yields `None`.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a `YYYY-MM-DD` value from a date input.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_timestamps() {
        assert_eq!(format_display_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_display_date("2024-03-05"), "05/03/2024");
    }

    #[test]
    fn malformed_input_formats_as_sentinel() {
        assert_eq!(format_display_date("not a date"), MISSING_DATE);
        assert_eq!(format_display_date(""), MISSING_DATE);
    }

    #[test]
    fn display_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            parse_display_date(&format_display_date("2024-03-15")),
            Some(date)
        );
    }

    #[test]
    fn rejects_malformed_display_dates() {
        assert_eq!(parse_display_date(MISSING_DATE), None);
        assert_eq!(parse_display_date("31/02/2024"), None);
        assert_eq!(parse_display_date("15/03"), None);
        assert_eq!(parse_display_date("15/03/2024/1"), None);
        assert_eq!(parse_display_date("aa/bb/cccc"), None);
    }

    #[test]
    fn parses_input_dates() {
        assert_eq!(
            parse_input_date("2024-03-10"),
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
        assert_eq!(parse_input_date(""), None);
    }
}
