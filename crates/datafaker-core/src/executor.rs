use async_trait::async_trait;

use crate::error::ExecutionResult;

/// Transaction primitives the batch pipeline replays generated statements on.
///
/// A batch calls `begin` once, `execute_update` once per statement in order,
/// then exactly one of `commit` or `rollback`.
#[async_trait]
pub trait TransactionalExecutor: Send {
    /// Returns the backend identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Opens a transaction.
    async fn begin(&mut self) -> ExecutionResult<()>;

    /// Executes one statement inside the open transaction and returns the
    /// number of affected rows.
    async fn execute_update(&mut self, sql: &str) -> ExecutionResult<u64>;

    /// Commits the open transaction.
    async fn commit(&mut self) -> ExecutionResult<()>;

    /// Rolls back the open transaction.
    async fn rollback(&mut self) -> ExecutionResult<()>;
}
