//! Command-line entry point for vod-seed.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use vod_seed::{SeedOpts, Seeder};

#[derive(Parser)]
#[command(name = "vod-seed")]
#[command(about = "Seed a video-on-demand PostgreSQL database with synthetic data")]
struct Cli {
    #[command(flatten)]
    opts: SeedOpts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut seeder = Seeder::connect(&cli.opts.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    if cli.opts.create_tables {
        seeder
            .recreate_tables()
            .await
            .context("failed to recreate VOD tables")?;
    }

    let report = seeder
        .run(cli.opts.row_count, cli.opts.seed)
        .await
        .context("seeding failed")?;

    if cli.opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!(
            "Done: {} rows committed across 12 tables",
            report.total_rows()
        );
    }

    Ok(())
}
