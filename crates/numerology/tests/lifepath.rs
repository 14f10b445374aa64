use lifepath_numerology::{
    calculate_date_lifepath, calculate_lifepath, calculate_personal_year, NumerologyConfig,
};

#[test]
fn reference_date_1990_01_01() {
    let config = NumerologyConfig::new();
    let result = calculate_lifepath("1990-01-01", &config).unwrap();
    assert_eq!(result.number, 3);
    assert_eq!(result.calculation, vec![0, 1, 0, 1, 1, 9, 9, 0]);
    assert_eq!(result.total, 21);
    assert_eq!(result.birth_date, "01/01/1990");
}

#[test]
fn master_number_day_is_one_token() {
    let config = NumerologyConfig::new();
    let result = calculate_lifepath("1977-11-22", &config).unwrap();
    // Both month 11 and day 22 stay whole.
    assert_eq!(&result.calculation[..2], &[11, 22]);
    assert_eq!(result.total, 57);
    assert_eq!(result.number, 3);
}

#[test]
fn year_half_is_tokenized_not_reduced() {
    // "19" and "90" each split into digits; the halves are never reduced
    // on their own, only the grand total is.
    let config = NumerologyConfig::new();
    let result = calculate_lifepath("1990-07-04", &config).unwrap();
    assert_eq!(result.calculation, vec![0, 7, 0, 4, 1, 9, 9, 0]);
    assert_eq!(result.total, 30);
    assert_eq!(result.number, 3);
}

#[test]
fn master_year_half_short_circuits() {
    // Year 2211: halves "22" and "11" are both master numbers.
    let config = NumerologyConfig::new();
    let result = calculate_date_lifepath(2211, 1, 1, &config).unwrap();
    assert_eq!(result.calculation, vec![0, 1, 0, 1, 22, 11]);
    assert_eq!(result.total, 35);
    assert_eq!(result.number, 8);
}

#[test]
fn malformed_dates_are_rejected() {
    let config = NumerologyConfig::new();
    for bad in ["", "1990", "1990-01", "01/01/1990", "1990-13-01", "1990-02-30", "199a-01-01"] {
        assert!(
            calculate_lifepath(bad, &config).is_err(),
            "expected '{bad}' to be rejected"
        );
    }
}

#[test]
fn personal_year_replaces_birth_year() {
    let config = NumerologyConfig::new();
    let lifepath = calculate_lifepath("1984-03-07", &config).unwrap();
    let personal = calculate_personal_year("1984-03-07", 1984, &config).unwrap();
    // Same year in both → identical arithmetic.
    assert_eq!(personal.calculation, lifepath.calculation);
    assert_eq!(personal.total, lifepath.total);
    assert_eq!(personal.number, lifepath.number);
    assert_eq!(personal.target_year, 1984);

    // Different target year → different arithmetic.
    let other = calculate_personal_year("1984-03-07", 2026, &config).unwrap();
    assert_eq!(other.calculation, vec![0, 3, 0, 7, 2, 0, 2, 6]);
    assert_eq!(other.total, 20);
    assert_eq!(other.number, 2);
}

#[test]
fn idempotent_deep_equal() {
    let config = NumerologyConfig::new();
    let a = calculate_lifepath("1969-12-28", &config).unwrap();
    let b = calculate_lifepath("1969-12-28", &config).unwrap();
    assert_eq!(a, b);

    let pa = calculate_personal_year("1969-12-28", 2025, &config).unwrap();
    let pb = calculate_personal_year("1969-12-28", 2025, &config).unwrap();
    assert_eq!(pa, pb);
}

#[test]
fn serializes_with_contract_field_names() {
    let config = NumerologyConfig::new();
    let result = calculate_lifepath("1990-01-01", &config).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["number"], 3);
    assert_eq!(json["birthDate"], "01/01/1990");
    assert!(json["reductionSteps"].is_array());
    assert!(json["calculation"].is_array());

    let personal = calculate_personal_year("1990-01-01", 2025, &config).unwrap();
    let json: serde_json::Value = serde_json::to_value(&personal).unwrap();
    assert_eq!(json["targetYear"], 2025);
}
