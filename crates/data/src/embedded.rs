//! The embedded fallback dataset: no I/O, compiled-in constants.

use lifepath_calendar::GregorianDate;
use lifepath_zodiac::CompatibilityDataset;

use crate::error::DataError;
use crate::loader::DatasetLoader;

/// Chinese New Year dates 2015–2050 as `(year, month, day)`.
const NEW_YEAR_DATES: [(i32, u8, u8); 36] = [
    (2015, 2, 19),
    (2016, 2, 8),
    (2017, 1, 28),
    (2018, 2, 16),
    (2019, 2, 5),
    (2020, 1, 25),
    (2021, 2, 12),
    (2022, 2, 1),
    (2023, 1, 22),
    (2024, 2, 10),
    (2025, 1, 29),
    (2026, 2, 17),
    (2027, 2, 6),
    (2028, 1, 26),
    (2029, 2, 13),
    (2030, 2, 3),
    (2031, 1, 23),
    (2032, 2, 11),
    (2033, 1, 31),
    (2034, 2, 19),
    (2035, 2, 8),
    (2036, 1, 28),
    (2037, 2, 15),
    (2038, 2, 4),
    (2039, 1, 24),
    (2040, 2, 12),
    (2041, 2, 1),
    (2042, 1, 22),
    (2043, 2, 10),
    (2044, 1, 30),
    (2045, 2, 17),
    (2046, 2, 6),
    (2047, 1, 26),
    (2048, 2, 14),
    (2049, 2, 2),
    (2050, 1, 23),
];

/// Produces the compiled-in dataset: the traditional relations plus the
/// 2015–2050 Chinese New Year table. Used when no JSON documents are
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl DatasetLoader for EmbeddedLoader {
    fn load(&self) -> Result<CompatibilityDataset, DataError> {
        let mut dataset = CompatibilityDataset::traditional();
        for (year, month, day) in NEW_YEAR_DATES {
            // The table is a compile-time constant of real calendar dates.
            let date = GregorianDate::new(year, month, day)
                .expect("embedded New Year table contains only valid dates");
            dataset.new_year_dates.insert(year, date);
        }
        dataset.validate()?;
        Ok(dataset)
    }
}
