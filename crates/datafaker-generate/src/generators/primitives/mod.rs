use chrono::NaiveDateTime;
use rand::{Rng, RngCore};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::FakerError;
use crate::generators::{GeneratedValue, RandomData};

pub const DEFAULT_PRECISION: u32 = 2;
pub const MAX_PRECISION: u32 = 28;

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

/// Inclusive bounds for a [`RangeGenerator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeSpec {
    Int {
        min: i32,
        max: i32,
    },
    Long {
        min: i64,
        max: i64,
    },
    Float {
        min: f32,
        max: f32,
        #[serde(default = "default_precision")]
        precision: u32,
    },
    Double {
        min: f64,
        max: f64,
        #[serde(default = "default_precision")]
        precision: u32,
    },
    Time {
        min: NaiveDateTime,
        max: NaiveDateTime,
    },
}

impl RangeSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            RangeSpec::Int { .. } => "int",
            RangeSpec::Long { .. } => "long",
            RangeSpec::Float { .. } => "float",
            RangeSpec::Double { .. } => "double",
            RangeSpec::Time { .. } => "time",
        }
    }

    /// Overrides the fractional digits of a floating range; other kinds are
    /// returned unchanged.
    pub fn precision(self, digits: u32) -> Self {
        match self {
            RangeSpec::Float { min, max, .. } => RangeSpec::Float {
                min,
                max,
                precision: digits,
            },
            RangeSpec::Double { min, max, .. } => RangeSpec::Double {
                min,
                max,
                precision: digits,
            },
            other => other,
        }
    }
}

#[derive(Debug)]
enum Bounds {
    Int {
        min: i32,
        max: i32,
    },
    Long {
        min: i64,
        max: i64,
    },
    Decimal {
        min: f64,
        max: f64,
        low: Decimal,
        high: Decimal,
        precision: u32,
    },
    Time {
        min: NaiveDateTime,
        span_seconds: i64,
    },
}

/// Draws one value uniformly from an inclusive numeric or temporal range.
///
/// Floating kinds are rounded half away from zero to the configured number of
/// fractional digits and never leave the range after rounding.
#[derive(Debug)]
pub struct RangeGenerator {
    spec: RangeSpec,
    bounds: Bounds,
}

impl RangeGenerator {
    pub fn new(spec: RangeSpec) -> Result<Self, FakerError> {
        let bounds = match &spec {
            RangeSpec::Int { min, max } => {
                check_order("int", min, max)?;
                Bounds::Int {
                    min: *min,
                    max: *max,
                }
            }
            RangeSpec::Long { min, max } => {
                check_order("long", min, max)?;
                Bounds::Long {
                    min: *min,
                    max: *max,
                }
            }
            RangeSpec::Float {
                min,
                max,
                precision,
            } => decimal_bounds(
                "float",
                (f64::from(*min), Decimal::from_f32(*min)),
                (f64::from(*max), Decimal::from_f32(*max)),
                *precision,
            )?,
            RangeSpec::Double {
                min,
                max,
                precision,
            } => decimal_bounds(
                "double",
                (*min, Decimal::from_f64(*min)),
                (*max, Decimal::from_f64(*max)),
                *precision,
            )?,
            RangeSpec::Time { min, max } => {
                check_order("time", min, max)?;
                Bounds::Time {
                    min: *min,
                    span_seconds: (*max - *min).num_seconds(),
                }
            }
        };
        Ok(Self { spec, bounds })
    }

    pub fn spec(&self) -> &RangeSpec {
        &self.spec
    }
}

impl RandomData for RangeGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        match &self.bounds {
            Bounds::Int { min, max } => GeneratedValue::Int(rng.random_range(*min..=*max)),
            Bounds::Long { min, max } => GeneratedValue::Long(rng.random_range(*min..=*max)),
            Bounds::Decimal {
                min,
                max,
                low,
                high,
                precision,
            } => {
                let raw = rng.random_range(*min..=*max);
                let value = Decimal::from_f64(raw)
                    .unwrap_or(*low)
                    .round_dp_with_strategy(*precision, RoundingStrategy::MidpointAwayFromZero);
                GeneratedValue::Decimal(value.clamp(*low, *high))
            }
            Bounds::Time { min, span_seconds } => {
                let offset = rng.random_range(0..=*span_seconds);
                GeneratedValue::Timestamp(*min + chrono::Duration::seconds(offset))
            }
        }
    }
}

fn check_order<T: PartialOrd + std::fmt::Debug>(
    kind: &'static str,
    min: &T,
    max: &T,
) -> Result<(), FakerError> {
    if min > max {
        return Err(FakerError::config(format!(
            "{kind} range min must be <= max (got {min:?} > {max:?})"
        )));
    }
    Ok(())
}

/// `min` and `max` pair the sampling bound with its decimal value at the
/// source type's precision, so an `f32` bound such as `1.1` stays `1.1`.
fn decimal_bounds(
    kind: &'static str,
    (min, min_decimal): (f64, Option<Decimal>),
    (max, max_decimal): (f64, Option<Decimal>),
    precision: u32,
) -> Result<Bounds, FakerError> {
    if precision > MAX_PRECISION {
        return Err(FakerError::config(format!(
            "{kind} range precision must be <= {MAX_PRECISION} (got {precision})"
        )));
    }
    let (Some(min_decimal), Some(max_decimal)) = (min_decimal, max_decimal) else {
        return Err(FakerError::config(format!(
            "{kind} range bounds must be finite decimal numbers"
        )));
    };
    check_order(kind, &min, &max)?;

    let low = min_decimal.round_dp_with_strategy(precision, RoundingStrategy::ToPositiveInfinity);
    let high = max_decimal.round_dp_with_strategy(precision, RoundingStrategy::ToNegativeInfinity);
    if low > high {
        return Err(FakerError::config(format!(
            "{kind} range [{min_decimal}, {max_decimal}] holds no value with {precision} fractional digits"
        )));
    }

    Ok(Bounds::Decimal {
        min,
        max,
        low,
        high,
        precision,
    })
}

/// Picks one of a fixed list of literal values uniformly at random.
#[derive(Debug, Clone)]
pub struct CandidateSetGenerator {
    values: Vec<GeneratedValue>,
}

impl CandidateSetGenerator {
    pub fn new(values: Vec<GeneratedValue>) -> Result<Self, FakerError> {
        if values.is_empty() {
            return Err(FakerError::config("candidate set must not be empty"));
        }
        if let Some(value) = values.iter().find(|value| !value.is_finite()) {
            return Err(FakerError::config(format!(
                "candidate {value} has no SQL literal"
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[GeneratedValue] {
        &self.values
    }
}

impl RandomData for CandidateSetGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let idx = rng.random_range(0..self.values.len());
        self.values[idx].clone()
    }
}
