use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FakerError;
use crate::generators::GeneratorClass;
use crate::generators::semantic::{
    AddressGenerator, AgeGenerator, BirthdayGenerator, EmailGenerator, IdGenerator,
    PhoneGenerator, SexGenerator, TimeGenerator, UsernameGenerator,
};

/// Semantic data kinds with a built-in generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Username,
    Age,
    Sex,
    Address,
    Birthday,
    Time,
    Phone,
    Email,
    Id,
}

impl DataType {
    pub const ALL: [DataType; 9] = [
        DataType::Username,
        DataType::Age,
        DataType::Sex,
        DataType::Address,
        DataType::Birthday,
        DataType::Time,
        DataType::Phone,
        DataType::Email,
        DataType::Id,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Username => "username",
            DataType::Age => "age",
            DataType::Sex => "sex",
            DataType::Address => "address",
            DataType::Birthday => "birthday",
            DataType::Time => "time",
            DataType::Phone => "phone",
            DataType::Email => "email",
            DataType::Id => "id",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|data_type| data_type.as_str().eq_ignore_ascii_case(value))
    }

    pub fn description(self) -> &'static str {
        match self {
            DataType::Username => "internet user name",
            DataType::Age => "integer age in 1..=100",
            DataType::Sex => "0 or 1",
            DataType::Address => "street and city",
            DataType::Birthday => "date between 1950-01-01 and 2010-12-31",
            DataType::Time => "timestamp between 1970-01-01 and now",
            DataType::Phone => "11-digit mobile number",
            DataType::Email => "safe example email address",
            DataType::Id => "UUID v4 text",
        }
    }

    /// Generator class backing this data type.
    pub fn generator_class(self) -> GeneratorClass {
        match self {
            DataType::Username => GeneratorClass::of::<UsernameGenerator>(),
            DataType::Age => GeneratorClass::of::<AgeGenerator>(),
            DataType::Sex => GeneratorClass::of::<SexGenerator>(),
            DataType::Address => GeneratorClass::of::<AddressGenerator>(),
            DataType::Birthday => GeneratorClass::of::<BirthdayGenerator>(),
            DataType::Time => GeneratorClass::of::<TimeGenerator>(),
            DataType::Phone => GeneratorClass::of::<PhoneGenerator>(),
            DataType::Email => GeneratorClass::of::<EmailGenerator>(),
            DataType::Id => GeneratorClass::of::<IdGenerator>(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = FakerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| FakerError::config(format!("unknown data type '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::DataType;

    #[test]
    fn every_data_type_maps_to_a_distinct_class() {
        let ids: HashSet<_> = DataType::ALL
            .iter()
            .map(|data_type| data_type.generator_class().type_id())
            .collect();
        assert_eq!(ids.len(), DataType::ALL.len());
    }

    #[test]
    fn parse_accepts_names_case_insensitively() {
        for data_type in DataType::ALL {
            assert_eq!(DataType::parse(data_type.as_str()), Some(data_type));
        }
        assert_eq!(DataType::parse(" EMAIL "), Some(DataType::Email));
        assert_eq!(DataType::parse("nickname"), None);
        assert!("phone".parse::<DataType>().is_ok());
        assert!("nickname".parse::<DataType>().is_err());
    }
}
