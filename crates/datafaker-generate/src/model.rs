use serde::{Deserialize, Serialize};

use crate::catalog::DataType;
use crate::generators::{GeneratedValue, GeneratorClass, RangeSpec, SequenceSpec, SharedGenerator};

/// Where a column's values come from.
#[derive(Debug, Clone)]
pub enum ParamSource {
    /// Built-in catalog key, resolved through the registry.
    DataType(DataType),
    /// Generator type, resolved through the registry.
    Class(GeneratorClass),
    /// Generator type registered on the registry under a name.
    Named(String),
    /// Live instance, used as is.
    Instance(SharedGenerator),
    /// Literal candidates, one picked per row.
    Values(Vec<GeneratedValue>),
    Range(RangeSpec),
    Sequence(SequenceSpec),
}

impl ParamSource {
    pub fn instance<G: crate::generators::RandomData + 'static>(generator: G) -> Self {
        ParamSource::Instance(crate::generators::shared(generator))
    }

    pub fn named(name: impl Into<String>) -> Self {
        ParamSource::Named(name.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParamSource::DataType(_) => "data_type",
            ParamSource::Class(_) => "class",
            ParamSource::Named(_) => "named",
            ParamSource::Instance(_) => "instance",
            ParamSource::Values(_) => "values",
            ParamSource::Range(_) => "range",
            ParamSource::Sequence(_) => "sequence",
        }
    }
}

impl From<DataType> for ParamSource {
    fn from(value: DataType) -> Self {
        ParamSource::DataType(value)
    }
}

impl From<GeneratorClass> for ParamSource {
    fn from(value: GeneratorClass) -> Self {
        ParamSource::Class(value)
    }
}

impl From<SharedGenerator> for ParamSource {
    fn from(value: SharedGenerator) -> Self {
        ParamSource::Instance(value)
    }
}

impl From<RangeSpec> for ParamSource {
    fn from(value: RangeSpec) -> Self {
        ParamSource::Range(value)
    }
}

impl From<SequenceSpec> for ParamSource {
    fn from(value: SequenceSpec) -> Self {
        ParamSource::Sequence(value)
    }
}

/// A column bound to its value source.
#[derive(Debug, Clone)]
pub struct Binding {
    pub column: String,
    pub source: ParamSource,
}

/// Lifecycle of a [`crate::Faker`] session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Configuring,
    Ignored,
    Displayed,
    Executed,
    Failed,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::Configuring)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeMode {
    Preview,
    Commit,
}

/// Summary of one preview or commit run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub table: String,
    pub mode: OutcomeMode,
    pub columns: Vec<String>,
    pub rows_generated: u64,
    /// Rows reported by the executor; always 0 for previews.
    pub rows_affected: u64,
    pub duration_ms: u64,
    pub statements: Vec<String>,
}
