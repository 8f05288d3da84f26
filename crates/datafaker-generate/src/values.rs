use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::FakerError;
use crate::generators::primitives::DEFAULT_PRECISION;
use crate::generators::{GeneratedValue, RangeSpec, SequenceSpec};
use crate::model::ParamSource;

/// Shorthands for candidate sets and ranges.
pub struct Values;

impl Values {
    /// Candidate set; one value is picked uniformly per row.
    pub fn of<T, I>(values: I) -> ParamSource
    where
        I: IntoIterator<Item = T>,
        T: Into<GeneratedValue>,
    {
        ParamSource::Values(values.into_iter().map(Into::into).collect())
    }

    pub fn int_range(min: i32, max: i32) -> RangeSpec {
        RangeSpec::Int { min, max }
    }

    pub fn long_range(min: i64, max: i64) -> RangeSpec {
        RangeSpec::Long { min, max }
    }

    /// Float range rounded to two fractional digits; see [`RangeSpec::precision`].
    pub fn float_range(min: f32, max: f32) -> RangeSpec {
        RangeSpec::Float {
            min,
            max,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Double range rounded to two fractional digits; see [`RangeSpec::precision`].
    pub fn double_range(min: f64, max: f64) -> RangeSpec {
        RangeSpec::Double {
            min,
            max,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn time_range(min: NaiveDateTime, max: NaiveDateTime) -> RangeSpec {
        RangeSpec::Time { min, max }
    }
}

/// Shorthands for stateful sequences.
pub struct Sequences;

impl Sequences {
    pub fn long_start(start: i64) -> SequenceSpec {
        SequenceSpec::starting_at(start)
    }

    pub fn of_list<T, I>(values: I) -> SequenceSpec
    where
        I: IntoIterator<Item = T>,
        T: Into<GeneratedValue>,
    {
        SequenceSpec::cycle(values)
    }
}

/// Timestamp constructors for time ranges.
pub struct Times;

impl Times {
    /// Midnight of the given day.
    pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDateTime, FakerError> {
        Self::datetime(year, month, day, 0, 0, 0)
    }

    pub fn datetime(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<NaiveDateTime, FakerError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or_else(|| {
                FakerError::config(format!(
                    "invalid timestamp {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })
    }
}
