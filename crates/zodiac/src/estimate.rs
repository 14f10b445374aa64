//! Chinese New Year estimation for years missing from the dataset.

use lifepath_calendar::GregorianDate;

/// Estimates the Chinese New Year date for a year absent from the
/// dataset's table.
///
/// Chinese New Year falls between Jan 21 and Feb 20; this approximates
/// the position within that window from the year's place in the 19-year
/// Metonic cycle: `day = 21 + floor((year mod 19) * 1.5)`, counted from
/// Jan 1. The result is best-effort — exact dates require a populated
/// New Year table.
pub fn estimate_new_year(year: i32) -> GregorianDate {
    let year_mod = year.rem_euclid(19);
    let base_day = 21 + (year_mod * 3) / 2;
    let (month, day) = if base_day <= 31 {
        (1, base_day as u8)
    } else {
        (2, (base_day - 31) as u8)
    };
    // base_day is 21..=48, so day lands in Jan 21..=31 or Feb 1..=17.
    GregorianDate::new(year, month, day).expect("estimated day is always within its month")
}
