//! Core contracts shared by the datafaker crates.
//!
//! This crate defines the value model produced by generators, its SQL literal
//! rendering, and the transactional executor seam used to commit batches.

pub mod error;
pub mod executor;
pub mod value;

pub use error::{ExecutionError, ExecutionResult};
pub use executor::TransactionalExecutor;
pub use value::GeneratedValue;

/// Date format used for quoted `DATE` literals.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format used for quoted `TIME` literals.
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// Timestamp format used for quoted `TIMESTAMP` literals.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
