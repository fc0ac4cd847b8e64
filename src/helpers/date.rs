//! Date helper functions

use chrono::NaiveDate;

/// Format a date in full format (like "April 2, 2025")
pub fn full_date(date: &NaiveDate) -> String {
    // %-d avoids the zero-padded day ("April 02")
    date.format("%B %-d, %Y").to_string()
}

/// Format a date in ISO 8601 form ("2025-04-02")
pub fn iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_date() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        assert_eq!(full_date(&date), "April 2, 2025");

        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(full_date(&date), "December 25, 2024");
    }

    #[test]
    fn test_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        assert_eq!(iso_date(&date), "2025-04-02");
    }
}
