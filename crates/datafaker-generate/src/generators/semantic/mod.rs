//! Generators behind the built-in [`crate::DataType`] catalog.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use fake::Fake;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::internet::en::{SafeEmail, Username};
use rand::{Rng, RngCore};

use crate::generators::{GeneratedValue, RandomData};

const MIN_AGE: i32 = 1;
const MAX_AGE: i32 = 100;

#[derive(Debug, Default)]
pub struct UsernameGenerator;

impl RandomData for UsernameGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let value: String = Username().fake_with_rng(rng);
        GeneratedValue::Text(value)
    }
}

#[derive(Debug, Default)]
pub struct AgeGenerator;

impl RandomData for AgeGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Int(rng.random_range(MIN_AGE..=MAX_AGE))
    }
}

/// `0` or `1`.
#[derive(Debug, Default)]
pub struct SexGenerator;

impl RandomData for SexGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Int(rng.random_range(0..=1))
    }
}

#[derive(Debug, Default)]
pub struct AddressGenerator;

impl RandomData for AddressGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let city: String = CityName().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        GeneratedValue::Text(format!("{street}, {city}"))
    }
}

/// Calendar date between 1950-01-01 and 2010-12-31.
#[derive(Debug, Default)]
pub struct BirthdayGenerator;

impl RandomData for BirthdayGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let min = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or_default();
        let max = NaiveDate::from_ymd_opt(2010, 12, 31).unwrap_or_default();
        let span = (max - min).num_days().max(0);
        let offset = rng.random_range(0..=span);
        GeneratedValue::Date(min + chrono::Duration::days(offset))
    }
}

/// Second-resolution timestamp between the Unix epoch and now.
#[derive(Debug, Default)]
pub struct TimeGenerator;

impl RandomData for TimeGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let min = NaiveDateTime::default();
        let max = Utc::now().naive_utc();
        let span = (max - min).num_seconds().max(0);
        let offset = rng.random_range(0..=span);
        GeneratedValue::Timestamp(min + chrono::Duration::seconds(offset))
    }
}

/// Eleven-digit mobile number.
#[derive(Debug, Default)]
pub struct PhoneGenerator;

impl RandomData for PhoneGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let prefix = MOBILE_PREFIXES[rng.random_range(0..MOBILE_PREFIXES.len())];
        let suffix = rng.random_range(0..=99_999_999);
        GeneratedValue::Text(format!("{prefix}{suffix:08}"))
    }
}

#[derive(Debug, Default)]
pub struct EmailGenerator;

impl RandomData for EmailGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let value: String = SafeEmail().fake_with_rng(rng);
        GeneratedValue::Text(value)
    }
}

/// Random (v4) UUID rendered as text.
#[derive(Debug, Default)]
pub struct IdGenerator;

impl RandomData for IdGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let mut bytes = [0_u8; 16];
        rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        GeneratedValue::Text(uuid::Uuid::from_bytes(bytes).to_string())
    }
}

const MOBILE_PREFIXES: &[&str] = &[
    "130", "131", "132", "133", "134", "135", "136", "137", "138", "139", "150", "151", "152",
    "153", "155", "156", "157", "158", "159", "180", "182", "183", "185", "186", "187", "188",
    "189",
];
