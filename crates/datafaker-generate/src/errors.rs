use thiserror::Error;

use datafaker_core::ExecutionError;

/// Errors emitted while configuring, resolving or executing a batch.
///
/// Every variant leaves the session unusable until a new table is selected.
#[derive(Debug, Error)]
pub enum FakerError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("column '{column}' has no usable generator: {message}")]
    BindingType { column: String, message: String },
    #[error("cannot instantiate generator {class}: {message}")]
    Instantiation { class: String, message: String },
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),
}

impl FakerError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        FakerError::Configuration(message.into())
    }
}
