//! Show command - the detail page for one item.

use anyhow::{Context, Result};
use clap::Args;

use dexterm_api::PokeApiClient;
use dexterm_store::FavoritesStore;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Item id or slug name (e.g. `25` or `pikachu`).
    pub query: String,
}

/// Runs the show command.
pub async fn run(args: &ShowArgs, cli: &Cli) -> Result<()> {
    let client = PokeApiClient::new()?;
    let store = FavoritesStore::load_default().await;

    let query = args.query.to_lowercase();
    let item = client
        .fetch_item_detail(&query)
        .await
        .with_context(|| format!("Failed to fetch details for '{}'", args.query))?;

    let is_favorite = store.is_favorite(item.id).await;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&item)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_detail(&item, is_favorite));
        }
    }

    Ok(())
}
