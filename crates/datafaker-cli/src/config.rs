use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use datafaker_generate::generators::{RangeSpec, SequenceSpec};
use datafaker_generate::{DataType, Faker, GeneratedValue, ParamSource, Values};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read job file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("column '{column}': {message}")]
    Column { column: String, message: String },
}

impl ConfigError {
    fn column(column: &str, message: impl Into<String>) -> Self {
        ConfigError::Column {
            column: column.to_string(),
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// One batch: target table, row count and column sources.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    pub table: String,
    /// Rows to generate; `--count` overrides it.
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

/// A column and exactly one of its source keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub range: Option<RangeSpec>,
    #[serde(default)]
    pub values: Option<Vec<toml::Value>>,
    #[serde(default)]
    pub sequence: Option<SequenceConfig>,
    #[serde(default)]
    pub cycle: Option<CycleConfig>,
    #[serde(default)]
    pub generator: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    pub start: i64,
    #[serde(default = "default_step")]
    pub step: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleConfig {
    pub values: Vec<toml::Value>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_step() -> i64 {
    1
}

fn default_repeat() -> u32 {
    1
}

pub fn load_job(path: &Path) -> ConfigResult<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_job(&content)
}

pub fn parse_job(content: &str) -> ConfigResult<JobConfig> {
    let job: JobConfig = toml::from_str(content)?;
    for column in &job.columns {
        column.source()?;
    }
    Ok(job)
}

impl JobConfig {
    /// Selects the table and binds every column on `faker`.
    pub fn apply(&self, faker: &mut Faker, count: Option<i64>) -> ConfigResult<()> {
        faker.table(self.table.as_str());
        for column in &self.columns {
            faker.param(column.name.as_str(), column.source()?);
        }
        faker.insert_count(count.unwrap_or(self.count));
        if let Some(seed) = self.seed {
            faker.seed(seed);
        }
        Ok(())
    }
}

impl ColumnConfig {
    pub fn source(&self) -> ConfigResult<ParamSource> {
        let set = [
            self.data_type.is_some(),
            self.range.is_some(),
            self.values.is_some(),
            self.sequence.is_some(),
            self.cycle.is_some(),
            self.generator.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();
        if set != 1 {
            return Err(ConfigError::column(
                &self.name,
                format!(
                    "expected exactly one of data_type, range, values, sequence, cycle, generator (found {set})"
                ),
            ));
        }

        if let Some(name) = &self.data_type {
            let data_type = DataType::parse(name)
                .ok_or_else(|| ConfigError::column(&self.name, format!("unknown data type '{name}'")))?;
            return Ok(data_type.into());
        }
        if let Some(range) = &self.range {
            return Ok(range.clone().into());
        }
        if let Some(values) = &self.values {
            let values = convert_all(&self.name, values)?;
            return Ok(Values::of(values));
        }
        if let Some(sequence) = &self.sequence {
            return Ok(SequenceSpec::starting_at(sequence.start)
                .step(sequence.step)
                .into());
        }
        if let Some(cycle) = &self.cycle {
            let values = convert_all(&self.name, &cycle.values)?;
            return Ok(SequenceSpec::cycle(values).repeat_count(cycle.repeat).into());
        }
        match &self.generator {
            Some(name) => Ok(ParamSource::named(name.as_str())),
            None => Err(ConfigError::column(&self.name, "no source configured")),
        }
    }
}

fn convert_all(column: &str, values: &[toml::Value]) -> ConfigResult<Vec<GeneratedValue>> {
    values.iter().map(|value| convert_value(column, value)).collect()
}

/// Maps a TOML scalar to a generated value. Integers that fit an `i32` stay
/// ints so they render like the literal in the file.
fn convert_value(column: &str, value: &toml::Value) -> ConfigResult<GeneratedValue> {
    match value {
        toml::Value::String(text) => Ok(GeneratedValue::Text(text.clone())),
        toml::Value::Integer(number) => Ok(match i32::try_from(*number) {
            Ok(small) => GeneratedValue::Int(small),
            Err(_) => GeneratedValue::Long(*number),
        }),
        toml::Value::Float(number) => Ok(GeneratedValue::Double(*number)),
        toml::Value::Boolean(flag) => Ok(GeneratedValue::Bool(*flag)),
        toml::Value::Datetime(datetime) => convert_datetime(column, &datetime.to_string()),
        other => Err(ConfigError::column(
            column,
            format!("unsupported {} value in list", other.type_str()),
        )),
    }
}

fn convert_datetime(column: &str, text: &str) -> ConfigResult<GeneratedValue> {
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(GeneratedValue::Timestamp(timestamp));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(GeneratedValue::Date(date));
    }
    if let Ok(time) = NaiveTime::parse_from_str(text, "%H:%M:%S%.f") {
        return Ok(GeneratedValue::Time(time));
    }
    Err(ConfigError::column(
        column,
        format!("datetime '{text}' must not carry an offset"),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use datafaker_generate::GeneratorRegistry;

    use super::*;

    const SAMPLE: &str = include_str!("../jobs/user.toml");

    #[test]
    fn sample_job_binds_every_column() {
        let job = parse_job(SAMPLE).expect("sample job");
        let mut faker = Faker::new(Arc::new(GeneratorRegistry::new()));
        job.apply(&mut faker, None).expect("apply");

        assert_eq!(faker.table_name(), "user");
        assert_eq!(faker.row_count(), job.count);
        let kinds: Vec<&str> = faker
            .bindings()
            .iter()
            .map(|binding| binding.source.kind())
            .collect();
        assert_eq!(
            kinds,
            [
                "sequence", "data_type", "range", "range", "range", "values", "sequence", "named"
            ]
        );
    }

    #[test]
    fn count_override_wins() {
        let job = parse_job("table = \"t\"\ncount = 5\n[[columns]]\nname = \"a\"\ndata_type = \"age\"\n")
            .expect("job");
        let mut faker = Faker::new(Arc::new(GeneratorRegistry::new()));
        job.apply(&mut faker, Some(2)).expect("apply");
        assert_eq!(faker.row_count(), 2);
    }

    #[test]
    fn column_with_two_sources_is_rejected() {
        let result = parse_job(
            "table = \"t\"\n[[columns]]\nname = \"a\"\ndata_type = \"age\"\nvalues = [1, 2]\n",
        );
        assert!(matches!(result, Err(ConfigError::Column { column, .. }) if column == "a"));
    }

    #[test]
    fn column_without_source_is_rejected() {
        let result = parse_job("table = \"t\"\n[[columns]]\nname = \"a\"\n");
        assert!(matches!(result, Err(ConfigError::Column { .. })));
    }

    #[test]
    fn unknown_data_type_is_rejected() {
        let result = parse_job("table = \"t\"\n[[columns]]\nname = \"a\"\ndata_type = \"salary\"\n");
        assert!(matches!(result, Err(ConfigError::Column { .. })));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = parse_job("table = \"t\"\nrows = 3\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn toml_scalars_map_to_generated_values() {
        let parsed: toml::Table = toml::from_str(
            "a = 7\nb = 8888888888\nc = 1.5\nd = true\ne = \"x\"\nf = 2018-04-22\ng = 2016-03-12T05:12:33\nh = 07:14:22\n",
        )
        .expect("toml");
        let convert = |key: &str| convert_value("c", &parsed[key]).expect(key);

        assert_eq!(convert("a"), GeneratedValue::Int(7));
        assert_eq!(convert("b"), GeneratedValue::Long(8_888_888_888));
        assert_eq!(convert("c"), GeneratedValue::Double(1.5));
        assert_eq!(convert("d"), GeneratedValue::Bool(true));
        assert_eq!(convert("e"), GeneratedValue::Text("x".to_string()));
        assert_eq!(convert("f").to_sql_literal(), "'2018-04-22'");
        assert_eq!(convert("g").to_sql_literal(), "'2016-03-12 05:12:33'");
        assert_eq!(convert("h").to_sql_literal(), "'07:14:22'");
    }

    #[test]
    fn nested_lists_are_rejected() {
        let result = convert_value("a", &toml::Value::Array(Vec::new()));
        assert!(matches!(result, Err(ConfigError::Column { .. })));
    }
}
