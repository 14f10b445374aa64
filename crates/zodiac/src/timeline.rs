//! Chinese New Year timeline generation.

use serde::Serialize;

use crate::dataset::AnimalInfo;
use crate::engine::ZodiacEngine;

/// Which side of the base year a timeline covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The `count` years before the base year.
    Prior,
    /// The `count` years after the base year.
    Future,
}

/// One year's span in a Chinese New Year timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSpan {
    /// The Gregorian year the span belongs to.
    pub year: i32,
    /// Display metadata for that year's animal.
    pub zodiac: AnimalInfo,
    /// The year's Chinese New Year, formatted `"Feb 10, 2024"`; suffixed
    /// `" (est)"` when estimated.
    pub start_date: String,
    /// One day before the following year's Chinese New Year, formatted
    /// likewise; suffixed `" (est)"` when the following year's date was
    /// estimated.
    pub end_date: String,
}

impl ZodiacEngine {
    /// Generates `count` year spans adjacent to `base_year`, in ascending
    /// year order.
    ///
    /// `Direction::Prior` covers `base_year - count ..= base_year - 1`,
    /// `Direction::Future` covers `base_year + 1 ..= base_year + count`.
    /// Every year resolves: table years get exact dates, others estimates
    /// marked `" (est)"` per field.
    pub fn timeline(&self, base_year: i32, count: i32, direction: Direction) -> Vec<YearSpan> {
        let (start, end) = match direction {
            Direction::Prior => (base_year - count, base_year - 1),
            Direction::Future => (base_year + 1, base_year + count),
        };

        (start..=end)
            .map(|year| {
                let (new_year, start_estimated) = self.new_year_for(year);
                let (next_new_year, end_estimated) = self.new_year_for(year + 1);
                let end_date = next_new_year.previous_day();

                let suffix = |estimated: bool| if estimated { " (est)" } else { "" };
                YearSpan {
                    year,
                    zodiac: self.animal_info(self.animal_for_year(year)).clone(),
                    start_date: format!(
                        "{}{}",
                        new_year.format_short(),
                        suffix(start_estimated)
                    ),
                    end_date: format!("{}{}", end_date.format_short(), suffix(end_estimated)),
                }
            })
            .collect()
    }
}
