//! Round-trip properties of the year codec over label and integer forms.

use epoch_core::{CoreError, TimeRange, Year, format_year, parse_year};
use pretty_assertions::assert_eq;

#[test]
fn well_formed_labels_round_trip() {
    let labels = [
        "3000 BCE", "753 BCE", "44 BCE", "1 BCE", "0 CE", "1 CE", "476 CE", "1492 CE",
        "2024 CE",
    ];
    for label in labels {
        let year = parse_year(label).expect("label should parse");
        assert_eq!(format_year(year), label);
    }
}

#[test]
fn integers_round_trip_through_labels() {
    let mut year = -5000_i64;
    while year <= 5000 {
        assert_eq!(parse_year(&format_year(year)), Ok(year));
        year += 37;
    }
}

#[test]
fn year_newtype_and_range_agree() {
    let start: Year = "100 BCE".parse().expect("start parses");
    let end: Year = "2024 CE".parse().expect("end parses");
    let range = TimeRange::new(start.value(), end.value()).expect("ordered range");
    assert_eq!(range.start().to_string(), "100 BCE");
    assert_eq!(range.end().to_string(), "2024 CE");
}

#[test]
fn invalid_label_error_names_the_label() {
    let err = parse_year("next tuesday").unwrap_err();
    assert_eq!(err.to_string(), "Invalid year format: next tuesday");
    assert!(matches!(err, CoreError::InvalidYearFormat { .. }));
}
