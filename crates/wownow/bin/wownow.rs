//! wownow binary entry point.
//!
//! Parses arguments, initializes logging on stderr, fetches every product and
//! prints the JSON report on stdout. Any failure exits non-zero before
//! anything is printed.

use anyhow::Result;
use wownow::Cli;
use wownow_protocol::VersionsClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::from_args();
    let config = cli.client_config();

    tracing::info!(
        "Querying {} for products {:?}",
        config.base_url,
        cli.products
    );

    let client = VersionsClient::from_config(&config)?;
    let report = wownow::build_report(&client, &cli.products).await?;

    println!("{}", report.to_json(!cli.compact)?);

    Ok(())
}
