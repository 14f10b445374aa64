use std::collections::BTreeSet;

use lifepath_numerology::{
    calculate_date_lifepath, find_interesting_dates, InterestingCriteria, NumerologyConfig,
};
use lifepath_calendar::days_in_month;

#[test]
fn every_hit_has_a_reason_and_the_complement_has_none() {
    let config = NumerologyConfig::new();
    let criteria = InterestingCriteria::new()
        .with_lifepath_numbers([28])
        .with_special_days([28]);
    let year = 2024;

    let hits: Vec<_> = find_interesting_dates(year, &criteria, &config)
        .unwrap()
        .collect();
    assert!(!hits.is_empty());
    let hit_days: BTreeSet<(u8, u8)> = hits.iter().map(|d| (d.month, d.day)).collect();

    for hit in &hits {
        assert!(!hit.reasons.is_empty());
        assert!(hit.lifepath == 28 || hit.day == 28);
    }

    // Every day of the year NOT yielded matches neither criterion.
    for month in 1..=12u8 {
        for day in 1..=days_in_month(year, month).unwrap() {
            if hit_days.contains(&(month, day)) {
                continue;
            }
            let lifepath = calculate_date_lifepath(year, month, day, &config)
                .unwrap()
                .number;
            assert_ne!(lifepath, 28, "{year}-{month}-{day} should have been yielded");
            assert_ne!(day, 28, "{year}-{month}-{day} should have been yielded");
        }
    }
}

#[test]
fn leap_day_is_visited() {
    let config = NumerologyConfig::new();
    // Feb 29, 2024: 0+2+2+9+2+0+2+4 = 21 → 3.
    let criteria = InterestingCriteria::new()
        .with_lifepath_numbers([3])
        .with_special_days([]);
    let hits: Vec<_> = find_interesting_dates(2024, &criteria, &config)
        .unwrap()
        .collect();
    assert!(hits.iter().any(|d| d.month == 2 && d.day == 29));

    // A common year never yields Feb 29.
    let hits_2023: Vec<_> = find_interesting_dates(2023, &criteria, &config)
        .unwrap()
        .collect();
    assert!(!hits_2023.iter().any(|d| d.month == 2 && d.day == 29));
}

#[test]
fn master_and_special_labels() {
    let config = NumerologyConfig::new();
    let criteria = InterestingCriteria::new()
        .with_lifepath_numbers([11, 28])
        .with_special_days([]);
    let hits: Vec<_> = find_interesting_dates(2024, &criteria, &config)
        .unwrap()
        .collect();

    let master_hit = hits.iter().find(|d| d.lifepath == 11).unwrap();
    assert_eq!(master_hit.reasons, vec!["Lifepath = 11 (Master Number)".to_string()]);

    let special_hit = hits.iter().find(|d| d.lifepath == 28).unwrap();
    assert_eq!(
        special_hit.reasons,
        vec!["Lifepath = 28 (Special Number)".to_string()]
    );
}

#[test]
fn yields_in_calendar_order() {
    let config = NumerologyConfig::new();
    let criteria = InterestingCriteria::new();
    let hits: Vec<_> = find_interesting_dates(2024, &criteria, &config)
        .unwrap()
        .collect();
    for pair in hits.windows(2) {
        assert!((pair[0].month, pair[0].day) < (pair[1].month, pair[1].day));
    }
}

#[test]
fn serializes_with_contract_field_names() {
    let config = NumerologyConfig::new();
    let criteria = InterestingCriteria::new();
    let hit = find_interesting_dates(2024, &criteria, &config)
        .unwrap()
        .next()
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&hit).unwrap();
    assert!(json["lifepath"].is_number());
    assert!(json["reductionSteps"].is_array());
    assert!(json["reasons"].is_array());
}
