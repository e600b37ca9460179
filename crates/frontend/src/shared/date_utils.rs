//! Date display helpers. The console shows dates as DD/MM/YYYY.

use chrono::{DateTime, NaiveDate, Utc};

/// "2024-03-15" or "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time: String = time_part.chars().take(5).collect();
        let date = format_date(date_part);
        if date != date_part && time.len() == 5 {
            return format!("{} {}", date, time);
        }
    }
    format_date(datetime_str)
}

/// Optional timestamp, "-" when absent
pub fn format_opt_date(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

/// Browser's local date
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Browser's local wall-clock time, HH:MM:SS
pub fn clock_time() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

/// Current instant from the browser clock
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// ISO form used by request bodies
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31"), "31/12/2024");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_opt_date(None), "-");
        assert_eq!(format_opt_date(Some(" ")), "-");
    }

    #[test]
    fn test_iso_date() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(iso_date(d), "2024-06-05");
    }
}
