use anyhow::Context;
use clap::Parser;

use catalogue_cli::{Cli, run};
use catalogue_client::CatalogueClient;
use catalogue_insights::InsightsService;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    catalogue_observability::init(cli.log_filter());

    let client = CatalogueClient::new(&cli.base_url).context("invalid catalogue configuration")?;
    tracing::info!(base_url = %client.base_url(), "using catalogue service");

    let service = InsightsService::new(client);
    let report = run(&service, cli.command()).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
