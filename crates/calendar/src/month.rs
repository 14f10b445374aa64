//! Days-per-month tables and the Gregorian leap-year rule.

use crate::error::CalendarError;

/// Number of days in each month of a common year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH_COMMON: [u8; 13] =
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Three-letter English month abbreviations
/// (index 0 unused, index 1 = "Jan", ..., index 12 = "Dec").
pub(crate) const MONTH_ABBREV: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Divisible by 4, except century years, except years divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month of the given year.
///
/// February has 29 days in leap years.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH_COMMON[month as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn days_common_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2023, (i + 1) as u8).unwrap(), days);
        }
    }

    #[test]
    fn days_leap_february() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn invalid_month_zero() {
        assert_eq!(
            days_in_month(2024, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn invalid_month_13() {
        assert_eq!(
            days_in_month(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn table_integrity_common_year_total() {
        let total: u16 = DAYS_PER_MONTH_COMMON[1..=12]
            .iter()
            .copied()
            .map(u16::from)
            .sum();
        assert_eq!(total, 365);
    }
}
