use anyhow::Context;
use std::sync::Arc;
use visitor_registry::infra::{config, logging};
use visitor_registry::storage::queries;
use visitor_registry::{PgExecutor, QueryExecutor, VisitorRepository};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--create-table]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         or:\n\
           POSTGRES_USER, POSTGRES_PASSWORD, POSTGRES_HOST, POSTGRES_PORT, POSTGRES_DATABASE\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing(&config::log_level());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let create_table = args.iter().any(|a| a == "--create-table");

    // Force-read config (nice error messages if missing)
    let options = config::database_options()?;
    let max_connections = config::max_connections()?;

    println!("> Preflight:");
    println!("  host={} port={}", options.get_host(), options.get_port());
    println!("  database={}", options.get_database().unwrap_or("<default>"));
    println!("  max_connections={}", max_connections);

    let executor = Arc::new(
        PgExecutor::connect(options, max_connections)
            .await
            .context("could not connect to Postgres")?,
    );

    executor
        .execute(queries::PING, &[])
        .await
        .context("connected, but SELECT 1 failed")?;
    println!("  Database reachable.");

    if create_table {
        let visitors = VisitorRepository::new(executor.clone());
        println!("  {}", visitors.create_table().await?);
        let count = visitors.list_all_visitors().await?.len();
        println!("  visitors currently stored: {}", count);
    }

    executor.close().await;
    println!("> Preflight OK.");
    Ok(())
}
