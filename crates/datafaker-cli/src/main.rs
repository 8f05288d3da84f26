mod config;
mod logging;
mod names;
mod pg;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use datafaker_generate::{DataType, Faker, FakerError, GeneratorRegistry};
use thiserror::Error;
use uuid::Uuid;

use config::{ConfigError, load_job};
use logging::{LogOptions, LoggingError, init_logging};
use pg::{PgExecutor, detect_engine, redact_connection_string};

#[derive(Debug, Error)]
enum CliError {
    #[error("job error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Faker(#[from] FakerError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported engine: {0}")]
    UnsupportedEngine(String),
}

#[derive(Parser, Debug)]
#[command(name = "datafaker", version, about = "Generate fake rows as SQL inserts")]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct LogArgs {
    /// Log filter directive (e.g. `debug`, `datafaker_generate=trace`).
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    /// Also append JSON logs to this file.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the statements of a job and print them.
    Preview(PreviewArgs),
    /// Generate a job and insert it in one transaction.
    Insert(InsertArgs),
    /// List built-in data types and registered generator names.
    DataTypes,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// TOML job file.
    #[arg(long)]
    job: PathBuf,
    /// Override the job's row count.
    #[arg(long)]
    count: Option<i64>,
    /// Print the batch report as JSON instead of bare statements.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct InsertArgs {
    /// TOML job file.
    #[arg(long)]
    job: PathBuf,
    /// Database connection string.
    #[arg(long, env = "DATABASE_URL", value_name = "CONNECTION_STRING")]
    conn: String,
    /// Override the job's row count.
    #[arg(long)]
    count: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(&LogOptions {
        level: cli.log.log_level,
        json: cli.log.log_json,
        file: cli.log.log_file,
    })?;

    let registry = GeneratorRegistry::global();
    names::register_builtin_classes(&registry);

    match cli.command {
        Command::Preview(args) => run_preview(args),
        Command::Insert(args) => run_insert(args).await,
        Command::DataTypes => {
            list_data_types(&registry);
            Ok(())
        }
    }
}

fn run_preview(args: PreviewArgs) -> Result<(), CliError> {
    let job = load_job(&args.job)?;
    let mut faker = Faker::with_global_registry();
    job.apply(&mut faker, args.count)?;

    let report = faker.preview()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for statement in &report.statements {
            println!("{statement}");
        }
    }
    tracing::info!(
        event = "preview_finished",
        table = %report.table,
        rows = report.rows_generated,
        "generated {} rows",
        report.rows_generated
    );
    Ok(())
}

async fn run_insert(args: InsertArgs) -> Result<(), CliError> {
    let InsertArgs { job, conn, count } = args;
    let engine =
        detect_engine(&conn).ok_or_else(|| CliError::UnsupportedEngine(redact_connection_string(&conn)))?;

    let job = load_job(&job)?;
    let mut faker = Faker::with_global_registry();
    job.apply(&mut faker, count)?;

    let run_id = Uuid::new_v4();
    let timer = Instant::now();
    tracing::info!(
        event = "run_started",
        run_id = %run_id,
        engine,
        connection = %redact_connection_string(&conn)
    );

    let mut executor = PgExecutor::connect(&conn).await?;
    let report = faker.commit(&mut executor).await?;

    tracing::info!(
        event = "run_finished",
        run_id = %run_id,
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );
    println!("inserted {} rows into {}", report.rows_affected, report.table);
    Ok(())
}

fn list_data_types(registry: &GeneratorRegistry) {
    for data_type in DataType::ALL {
        println!("{:<10} {}", data_type.as_str(), data_type.description());
    }
    for name in registry.class_names() {
        println!("{name:<10} custom generator");
    }
}
