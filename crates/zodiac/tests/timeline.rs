use lifepath_calendar::GregorianDate;
use lifepath_zodiac::{CompatibilityDataset, Direction, ZodiacEngine};

fn dataset_with_dates() -> CompatibilityDataset {
    let mut dataset = CompatibilityDataset::traditional();
    for (year, iso) in [
        (2023, "2023-01-22"),
        (2024, "2024-02-10"),
        (2025, "2025-01-29"),
        (2026, "2026-02-17"),
    ] {
        dataset
            .new_year_dates
            .insert(year, GregorianDate::parse_iso(iso).unwrap());
    }
    dataset
}

#[test]
fn exact_spans_from_the_table() {
    let engine = ZodiacEngine::new(dataset_with_dates()).unwrap();
    let spans = engine.timeline(2023, 2, Direction::Future);

    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].year, 2024);
    assert_eq!(spans[0].zodiac.name, "Dragon");
    assert_eq!(spans[0].start_date, "Feb 10, 2024");
    // One day before 2025's New Year (Jan 29).
    assert_eq!(spans[0].end_date, "Jan 28, 2025");

    assert_eq!(spans[1].year, 2025);
    assert_eq!(spans[1].zodiac.name, "Snake");
    assert_eq!(spans[1].start_date, "Jan 29, 2025");
    assert_eq!(spans[1].end_date, "Feb 16, 2026");
}

#[test]
fn prior_direction_ascending() {
    let engine = ZodiacEngine::new(dataset_with_dates()).unwrap();
    let spans = engine.timeline(2026, 3, Direction::Prior);
    let years: Vec<i32> = spans.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![2023, 2024, 2025]);
}

#[test]
fn est_suffix_applied_per_field() {
    let engine = ZodiacEngine::new(dataset_with_dates()).unwrap();
    // 2026 is in the table but 2027 is not: exact start, estimated end.
    let spans = engine.timeline(2025, 1, Direction::Future);
    assert_eq!(spans[0].year, 2026);
    assert_eq!(spans[0].start_date, "Feb 17, 2026");
    assert!(spans[0].end_date.ends_with(" (est)"), "{}", spans[0].end_date);

    // 2022 is not in the table but 2023 is: estimated start, exact end.
    let spans = engine.timeline(2023, 1, Direction::Prior);
    assert_eq!(spans[0].year, 2022);
    assert!(spans[0].start_date.ends_with(" (est)"), "{}", spans[0].start_date);
    assert_eq!(spans[0].end_date, "Jan 21, 2023");
}

#[test]
fn resolves_for_any_year() {
    let engine = ZodiacEngine::new(CompatibilityDataset::traditional()).unwrap();
    let spans = engine.timeline(1850, 10, Direction::Prior);
    assert_eq!(spans.len(), 10);
    for span in &spans {
        assert!(!span.start_date.is_empty());
        assert!(!span.end_date.is_empty());
    }
}

#[test]
fn serializes_with_contract_field_names() {
    let engine = ZodiacEngine::new(dataset_with_dates()).unwrap();
    let spans = engine.timeline(2023, 1, Direction::Future);
    let json: serde_json::Value = serde_json::to_value(&spans[0]).unwrap();
    assert_eq!(json["year"], 2024);
    assert!(json["zodiac"]["name"].is_string());
    assert!(json["startDate"].is_string());
    assert!(json["endDate"].is_string());
}
