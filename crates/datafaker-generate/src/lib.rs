//! Value generation and batch orchestration for datafaker.
//!
//! Columns are bound to generation sources (catalog data types, generator
//! classes, live instances, candidate sets, ranges, sequences); a [`Faker`]
//! session resolves them through the [`GeneratorRegistry`] and renders one
//! `insert` statement per requested row, optionally committing the batch in a
//! single transaction.

pub mod catalog;
pub mod errors;
pub mod faker;
pub mod generators;
pub mod model;
pub mod registry;
pub mod values;

pub use catalog::DataType;
pub use errors::FakerError;
pub use faker::Faker;
pub use generators::{GeneratorClass, RandomData, SharedGenerator};
pub use model::{BatchReport, Binding, OutcomeMode, ParamSource, SessionState};
pub use registry::GeneratorRegistry;
pub use values::{Sequences, Times, Values};

pub use datafaker_core::{GeneratedValue, TransactionalExecutor};
