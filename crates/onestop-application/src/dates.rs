//! Local-date helpers for stamping created records.

use chrono::{Local, NaiveDate};

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's local date as `YYYY-MM-DD`, the format every stored record uses.
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_string_format() {
        let text = today_string();
        assert_eq!(text.len(), 10);
        assert!(NaiveDate::parse_from_str(&text, "%Y-%m-%d").is_ok());
    }
}
