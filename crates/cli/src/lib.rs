//! `catalogue` command-line front end.

pub mod config;

use anyhow::Result;
use serde_json::Value;

use catalogue_client::CatalogueApi;
use catalogue_core::SetId;
use catalogue_insights::InsightsService;

pub use config::{Cli, Command};

/// Run one command and return its report as a JSON document.
pub async fn run<A: CatalogueApi>(service: &InsightsService<A>, command: Command) -> Result<Value> {
    let report = match command {
        Command::BuildableSets { username } => {
            serde_json::to_value(service.buildable_sets(&username).await?)?
        }
        Command::MissingPieces { username, set_id } => {
            let set_id: SetId = set_id.parse()?;
            serde_json::to_value(service.missing_pieces(&username, &set_id).await?)?
        }
        Command::Collaborators { username, set_name } => {
            serde_json::to_value(service.collaborators(&username, &set_name).await?)?
        }
        Command::BuildSize { username, percentile } => {
            serde_json::to_value(service.build_size(&username, percentile).await?)?
        }
        Command::ColorFlexibility { username } => {
            serde_json::to_value(service.color_flexibility(&username).await?)?
        }
        Command::Users => serde_json::to_value(service.list_users().await?)?,
    };
    Ok(report)
}
