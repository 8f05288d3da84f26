use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::{DATE_FORMAT, TIME_FORMAT, TIMESTAMP_FORMAT};

/// Value produced by a generator for one column of one row.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// Floating value already rounded to a fixed number of fractional digits.
    Decimal(Decimal),
    Char(char),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    /// Whether the SQL literal for this value is wrapped in single quotes.
    pub fn is_quoted(&self) -> bool {
        matches!(
            self,
            GeneratedValue::Char(_)
                | GeneratedValue::Text(_)
                | GeneratedValue::Date(_)
                | GeneratedValue::Time(_)
                | GeneratedValue::Timestamp(_)
        )
    }

    /// False for NaN and infinite floats, which have no SQL literal.
    pub fn is_finite(&self) -> bool {
        match self {
            GeneratedValue::Float(value) => value.is_finite(),
            GeneratedValue::Double(value) => value.is_finite(),
            _ => true,
        }
    }

    /// Renders the value as a SQL literal.
    ///
    /// Strings, chars and temporal values are single-quoted with embedded
    /// quotes doubled; numbers and booleans are emitted bare.
    pub fn to_sql_literal(&self) -> String {
        let text = self.to_string();
        if self.is_quoted() {
            quote(&text)
        } else {
            text
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(i64::from(*value)),
            GeneratedValue::Long(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(f64::from(*value)),
            GeneratedValue::Long(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(f64::from(*value)),
            GeneratedValue::Double(value) => Some(*value),
            GeneratedValue::Decimal(value) => value.to_string().parse().ok(),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            GeneratedValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            GeneratedValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedValue::Null => f.write_str("null"),
            GeneratedValue::Bool(value) => write!(f, "{value}"),
            GeneratedValue::Int(value) => write!(f, "{value}"),
            GeneratedValue::Long(value) => write!(f, "{value}"),
            GeneratedValue::Float(value) => write!(f, "{value}"),
            GeneratedValue::Double(value) => write!(f, "{value}"),
            GeneratedValue::Decimal(value) => write!(f, "{value}"),
            GeneratedValue::Char(value) => write!(f, "{value}"),
            GeneratedValue::Text(value) => f.write_str(value),
            GeneratedValue::Date(value) => write!(f, "{}", value.format(DATE_FORMAT)),
            GeneratedValue::Time(value) => write!(f, "{}", value.format(TIME_FORMAT)),
            GeneratedValue::Timestamp(value) => write!(f, "{}", value.format(TIMESTAMP_FORMAT)),
        }
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for GeneratedValue {
                fn from(value: $ty) -> Self {
                    GeneratedValue::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Decimal => Decimal,
    char => Char,
    String => Text,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => Timestamp,
);

impl From<&str> for GeneratedValue {
    fn from(value: &str) -> Self {
        GeneratedValue::Text(value.to_string())
    }
}

impl<T: Into<GeneratedValue>> From<Option<T>> for GeneratedValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(GeneratedValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::quote;

    #[test]
    fn quote_doubles_embedded_quotes() {
        assert_eq!(quote("O'Brien"), "'O''Brien'");
        assert_eq!(quote(""), "''");
    }
}
