use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use datafaker_core::GeneratedValue;

#[test]
fn text_and_char_literals_are_quoted() {
    assert_eq!(GeneratedValue::from("jack").to_sql_literal(), "'jack'");
    assert_eq!(GeneratedValue::from('A').to_sql_literal(), "'A'");
    assert_eq!(GeneratedValue::from("it's").to_sql_literal(), "'it''s'");
}

#[test]
fn numeric_and_bool_literals_are_bare() {
    assert_eq!(GeneratedValue::from(13).to_sql_literal(), "13");
    assert_eq!(GeneratedValue::from(1_584_854_856_545_i64).to_sql_literal(), "1584854856545");
    assert_eq!(GeneratedValue::from(1.1_f32).to_sql_literal(), "1.1");
    assert_eq!(GeneratedValue::from(7.6_f64).to_sql_literal(), "7.6");
    assert_eq!(GeneratedValue::from(true).to_sql_literal(), "true");
    assert_eq!(GeneratedValue::Null.to_sql_literal(), "null");
}

#[test]
fn decimal_literal_keeps_its_scale() {
    let value = GeneratedValue::from(Decimal::from_str("22.50").expect("decimal"));
    assert_eq!(value.to_sql_literal(), "22.50");
    assert!(!value.is_quoted());
}

#[test]
fn temporal_literals_are_quoted() {
    let date = NaiveDate::from_ymd_opt(1999, 9, 9).expect("date");
    let time = NaiveTime::from_hms_opt(12, 12, 12).expect("time");

    assert_eq!(GeneratedValue::from(date).to_sql_literal(), "'1999-09-09'");
    assert_eq!(GeneratedValue::from(time).to_sql_literal(), "'12:12:12'");
    assert_eq!(
        GeneratedValue::from(date.and_time(time)).to_sql_literal(),
        "'1999-09-09 12:12:12'"
    );
}

#[test]
fn optional_values_map_none_to_null() {
    let missing: Option<i32> = None;
    assert!(GeneratedValue::from(missing).is_null());
    assert_eq!(GeneratedValue::from(Some(5_i64)).as_i64(), Some(5));
}

#[test]
fn numeric_values_widen_to_f64() {
    assert_eq!(GeneratedValue::from(13).as_f64(), Some(13.0));
    assert_eq!(GeneratedValue::from(7.5_f32).as_f64(), Some(7.5));
    let decimal = GeneratedValue::from(Decimal::from_str("22.50").expect("decimal"));
    assert_eq!(decimal.as_f64(), Some(22.5));
    assert_eq!(GeneratedValue::from("13").as_f64(), None);
}

#[test]
fn only_nan_and_infinite_floats_are_non_finite() {
    assert!(!GeneratedValue::from(f64::NAN).is_finite());
    assert!(!GeneratedValue::from(f32::INFINITY).is_finite());
    assert!(GeneratedValue::from(1.25_f64).is_finite());
    assert!(GeneratedValue::from("NaN").is_finite());
}
