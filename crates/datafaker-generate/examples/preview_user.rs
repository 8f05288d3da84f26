use datafaker_generate::{DataType, Faker, Sequences, Times, Values};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let count = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<i64>())
        .transpose()?
        .unwrap_or(5);

    let mut faker = Faker::default();
    faker
        .table("user")
        .param("id", Sequences::long_start(10_000))
        .param("name", DataType::Username)
        .param("age", Values::int_range(18, 33))
        .param("city", Values::of(["Tianjin", "Wuhan", "Beihai"]))
        .param("salary", Values::double_range(1666.66, 8888.88).precision(4))
        .param(
            "login_time",
            Values::time_range(
                Times::date(2016, 3, 12)?,
                Times::datetime(2018, 4, 22, 7, 14, 22)?,
            ),
        )
        .param("level", Sequences::of_list(["A", "B"]).repeat_count(3))
        .insert_count(count);

    let report = faker.preview()?;
    for statement in &report.statements {
        println!("{statement}");
    }
    Ok(())
}
