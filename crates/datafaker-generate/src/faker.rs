use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use datafaker_core::{ExecutionError, TransactionalExecutor};

use crate::errors::FakerError;
use crate::generators::{
    CandidateSetGenerator, RangeGenerator, SequenceGenerator, SharedGenerator,
};
use crate::model::{BatchReport, Binding, OutcomeMode, ParamSource, SessionState};
use crate::registry::GeneratorRegistry;

/// Caller-owned session that turns column bindings into `insert` statements.
///
/// Configure with [`Faker::table`], [`Faker::param`] and
/// [`Faker::insert_count`], then finish with [`Faker::ignore`],
/// [`Faker::preview`] or [`Faker::commit`]. Selecting a table resets the
/// session; any error leaves it unusable until the next `table` call.
#[derive(Debug)]
pub struct Faker {
    registry: Arc<GeneratorRegistry>,
    table: String,
    bindings: Vec<Binding>,
    count: i64,
    seed: Option<u64>,
    state: SessionState,
    statements: Vec<String>,
    total_affected: u64,
}

impl Default for Faker {
    fn default() -> Self {
        Self::with_global_registry()
    }
}

impl Faker {
    pub fn new(registry: Arc<GeneratorRegistry>) -> Self {
        Self {
            registry,
            table: String::new(),
            bindings: Vec::new(),
            count: 0,
            seed: None,
            state: SessionState::Configuring,
            statements: Vec::new(),
            total_affected: 0,
        }
    }

    pub fn with_global_registry() -> Self {
        Self::new(GeneratorRegistry::global())
    }

    /// Selects the target table and resets every other piece of session state.
    pub fn table(&mut self, name: impl Into<String>) -> &mut Self {
        self.table = name.into();
        self.bindings.clear();
        self.count = 0;
        self.seed = None;
        self.state = SessionState::Configuring;
        self.statements.clear();
        self.total_affected = 0;
        self
    }

    /// Binds `column` to `source`. Rebinding a column replaces its source but
    /// keeps its original position.
    pub fn param(&mut self, column: impl Into<String>, source: impl Into<ParamSource>) -> &mut Self {
        let column = column.into();
        if self.state.is_terminal() {
            self.ignore_call("param");
            return self;
        }
        let source = source.into();
        match self.bindings.iter_mut().find(|binding| binding.column == column) {
            Some(binding) => binding.source = source,
            None => self.bindings.push(Binding { column, source }),
        }
        self
    }

    /// Number of rows to generate; checked when the batch runs.
    pub fn insert_count(&mut self, count: i64) -> &mut Self {
        if self.state.is_terminal() {
            self.ignore_call("insert_count");
            return self;
        }
        self.count = count;
        self
    }

    /// Seeds the session RNG so the same bindings produce the same rows.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Discards the session without generating or executing anything.
    pub fn ignore(&mut self) {
        info!(table = %self.table, "batch ignored");
        self.bindings.clear();
        self.statements.clear();
        self.state = SessionState::Ignored;
    }

    /// Generates the statements without touching any database.
    pub fn preview(&mut self) -> Result<BatchReport, FakerError> {
        let start = Instant::now();
        let statements = self.prepare()?;
        self.statements = statements;
        self.state = SessionState::Displayed;

        info!(
            table = %self.table,
            rows_generated = self.statements.len(),
            "batch generated"
        );
        Ok(self.report(OutcomeMode::Preview, start))
    }

    /// Generates the statements and replays them in one transaction.
    ///
    /// Any executor failure rolls the whole batch back and is returned as
    /// [`FakerError::Execution`]; nothing is reported as committed.
    pub async fn commit<E>(&mut self, executor: &mut E) -> Result<BatchReport, FakerError>
    where
        E: TransactionalExecutor + ?Sized,
    {
        let start = Instant::now();
        let statements = self.prepare()?;
        self.statements = statements;

        info!(
            table = %self.table,
            engine = executor.engine(),
            statements = self.statements.len(),
            "batch execution started"
        );

        match run_in_transaction(executor, &self.statements).await {
            Ok(total) => {
                self.total_affected = total;
                self.state = SessionState::Executed;
                info!(
                    table = %self.table,
                    rows_affected = total,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "batch committed"
                );
                Ok(self.report(OutcomeMode::Commit, start))
            }
            Err(err) => {
                self.total_affected = 0;
                self.state = SessionState::Failed;
                warn!(table = %self.table, error = %err, "batch rolled back");
                Err(FakerError::Execution(err))
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn row_count(&self) -> i64 {
        self.count
    }

    /// Statements produced by the last preview or commit of this session.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn total_affected(&self) -> u64 {
        self.total_affected
    }

    pub fn registry(&self) -> &Arc<GeneratorRegistry> {
        &self.registry
    }

    fn ignore_call(&self, call: &'static str) {
        warn!(
            table = %self.table,
            state = ?self.state,
            call,
            "call ignored on a finished session; select a table first"
        );
    }

    /// Validate, resolve, generate. Marks the session failed on error.
    fn prepare(&mut self) -> Result<Vec<String>, FakerError> {
        let result = self
            .validate()
            .and_then(|()| self.resolve())
            .map(|generators| self.generate(&generators));
        if let Err(err) = &result {
            self.state = SessionState::Failed;
            self.statements.clear();
            warn!(table = %self.table, error = %err, "batch rejected");
        }
        result
    }

    fn validate(&self) -> Result<(), FakerError> {
        if self.state.is_terminal() {
            return Err(FakerError::config(format!(
                "session is {:?}; select a table to start a new batch",
                self.state
            )));
        }
        if self.table.trim().is_empty() {
            return Err(FakerError::config("table name must not be empty"));
        }
        if self.bindings.is_empty() {
            return Err(FakerError::config(
                "at least one column must be bound with param()",
            ));
        }
        if self.count < 1 {
            return Err(FakerError::config(format!(
                "insert count must be >= 1 (got {})",
                self.count
            )));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<Vec<SharedGenerator>, FakerError> {
        self.bindings
            .iter()
            .map(|binding| self.resolve_binding(binding))
            .collect()
    }

    fn resolve_binding(&self, binding: &Binding) -> Result<SharedGenerator, FakerError> {
        let generator: SharedGenerator = match &binding.source {
            ParamSource::DataType(data_type) => self.registry.data_type(*data_type)?,
            ParamSource::Class(class) => self.registry.instance(class)?,
            ParamSource::Named(name) => {
                let class =
                    self.registry
                        .class_named(name)
                        .ok_or_else(|| FakerError::BindingType {
                            column: binding.column.clone(),
                            message: format!("no generator class registered as '{name}'"),
                        })?;
                self.registry.instance(&class)?
            }
            ParamSource::Instance(generator) => Arc::clone(generator),
            ParamSource::Values(values) => Arc::new(
                CandidateSetGenerator::new(values.clone())
                    .map_err(|err| for_column(&binding.column, err))?,
            ),
            ParamSource::Range(spec) => Arc::new(
                RangeGenerator::new(spec.clone()).map_err(|err| for_column(&binding.column, err))?,
            ),
            ParamSource::Sequence(spec) => Arc::new(
                SequenceGenerator::new(spec.clone())
                    .map_err(|err| for_column(&binding.column, err))?,
            ),
        };
        debug!(
            column = %binding.column,
            source = binding.source.kind(),
            "binding resolved"
        );
        Ok(generator)
    }

    fn generate(&self, generators: &[SharedGenerator]) -> Vec<String> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let columns = self.column_list();
        let rows = usize::try_from(self.count).unwrap_or_default();
        let mut statements = Vec::with_capacity(statement_capacity(rows));

        for row in 0..rows {
            let values = generators
                .iter()
                .map(|generator| generator.next(&mut rng).to_sql_literal())
                .collect::<Vec<_>>()
                .join(",");
            let sql = format!("insert into {}({}) values({})", self.table, columns, values);
            debug!(row, sql = %sql, "statement generated");
            statements.push(sql);
        }
        statements
    }

    fn column_list(&self) -> String {
        self.bindings
            .iter()
            .map(|binding| binding.column.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn report(&self, mode: OutcomeMode, start: Instant) -> BatchReport {
        BatchReport {
            table: self.table.clone(),
            mode,
            columns: self
                .bindings
                .iter()
                .map(|binding| binding.column.clone())
                .collect(),
            rows_generated: self.statements.len() as u64,
            rows_affected: self.total_affected,
            duration_ms: start.elapsed().as_millis() as u64,
            statements: self.statements.clone(),
        }
    }
}

/// Upper bound on statements reserved up front; larger batches grow as needed.
const MAX_PREALLOCATED_STATEMENTS: usize = 1024;

fn statement_capacity(rows: usize) -> usize {
    rows.min(MAX_PREALLOCATED_STATEMENTS)
}

fn for_column(column: &str, err: FakerError) -> FakerError {
    match err {
        FakerError::Configuration(message) => {
            FakerError::Configuration(format!("column '{column}': {message}"))
        }
        other => other,
    }
}

/// begin, execute each statement, commit; rollback on the first failure.
async fn run_in_transaction<E>(executor: &mut E, statements: &[String]) -> Result<u64, ExecutionError>
where
    E: TransactionalExecutor + ?Sized,
{
    executor.begin().await?;

    let mut total = 0_u64;
    for (index, sql) in statements.iter().enumerate() {
        match executor.execute_update(sql).await {
            Ok(affected) => total = total.saturating_add(affected),
            Err(err) => {
                warn!(statement = index + 1, error = %err, "statement failed");
                if let Err(rollback_err) = executor.rollback().await {
                    warn!(error = %rollback_err, "rollback failed");
                }
                return Err(err);
            }
        }
    }

    executor.commit().await?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_capacity_is_bounded_for_huge_counts() {
        assert_eq!(statement_capacity(5), 5);
        assert_eq!(statement_capacity(usize::MAX), MAX_PREALLOCATED_STATEMENTS);
        let rows = usize::try_from(i64::MAX).unwrap_or_default();
        let statements: Vec<String> = Vec::with_capacity(statement_capacity(rows));
        assert!(statements.capacity() >= MAX_PREALLOCATED_STATEMENTS);
    }
}
