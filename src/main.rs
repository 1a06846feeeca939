mod config;
mod model;
mod normalizer;
mod parser;
mod storage;
mod transformer;
mod utils;

use clap::Parser as _;
use config::{AppConfig, Cli, load_config};
use model::AppError;
use normalizer::LabelNormalizer;
use parser::{CsvCourseParser, Parser};
use storage::{SupabaseUpserter, upload_in_chunks};
use transformer::{dedupe, transform_rows};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Pick up a local .env before anything reads the environment
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let cli = Cli::parse();

    // Configuration problems stop the run before the CSV is touched
    let config = match load_config(cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };

    match run(&config).await {
        Ok(count) => info!("Done. Upserted {} unique (code,name) rows.", count),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Reads, normalizes, deduplicates and upserts the course listing.
/// Any error ends the run; chunks sent before it are not rolled back.
async fn run(config: &AppConfig) -> Result<usize, AppError> {
    info!("Reading {}...", config.csv_path.display());
    let rows = CsvCourseParser::new().parse_file(&config.csv_path)?;

    info!("Mapping attributes for {} rows...", rows.len());
    let records = transform_rows(&rows, &LabelNormalizer::new())?;
    let records = dedupe(records);

    info!(
        "Upserting {} rows into '{}'...",
        records.len(),
        config.table
    );
    let upserter = SupabaseUpserter::new(&config.supabase_url, &config.table, &config.api_key)?;
    let count = upload_in_chunks(&upserter, &records).await?;
    Ok(count)
}
