//! Browse command - paginated catalog listing.

use anyhow::{Context, Result};
use clap::Args;
use std::sync::Arc;
use tracing::info;

use dexterm_api::PokeApiClient;
use dexterm_catalog::CatalogPipeline;
use dexterm_store::FavoritesStore;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Number of pages to load (20 items each).
    #[arg(long, short, default_value = "1")]
    pub pages: u32,

    /// Catalog offset to start browsing from.
    #[arg(long, short, default_value = "0")]
    pub offset: u32,
}

impl Default for BrowseArgs {
    fn default() -> Self {
        Self {
            pages: 1,
            offset: 0,
        }
    }
}

/// Runs the browse command.
pub async fn run(args: &BrowseArgs, cli: &Cli) -> Result<()> {
    let client = Arc::new(PokeApiClient::new()?);
    let pipeline = CatalogPipeline::new(client);
    let store = FavoritesStore::load_default().await;

    if args.offset > 0 {
        pipeline.seek(args.offset).await;
    }

    for _ in 0..args.pages {
        let appended = pipeline
            .load_next_page()
            .await
            .context("Failed to load catalog page")?;

        if appended.is_none() {
            info!("Reached the end of the catalog");
            break;
        }
    }

    let items = pipeline.items().await;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&items)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            for item in &items {
                let is_favorite = store.is_favorite(item.id).await;
                println!("{}", formatter.format_item_row(item, is_favorite));
            }
            if pipeline.has_more().await {
                println!("... more available (try --pages {})", args.pages + 1);
            }
        }
    }

    Ok(())
}
