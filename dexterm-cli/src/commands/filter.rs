//! Filter command - multi-type intersection.

use anyhow::Result;
use clap::Args;
use std::sync::Arc;
use tracing::warn;

use dexterm_api::PokeApiClient;
use dexterm_catalog::CatalogPipeline;
use dexterm_core::TypeKind;
use dexterm_store::FavoritesStore;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the filter command.
#[derive(Args)]
pub struct FilterArgs {
    /// Type names to intersect (e.g. `fire flying`).
    #[arg(required = true)]
    pub types: Vec<String>,
}

/// Runs the filter command.
pub async fn run(args: &FilterArgs, cli: &Cli) -> Result<()> {
    let names: Vec<String> = args.types.iter().map(|t| t.to_lowercase()).collect();

    for name in &names {
        if TypeKind::from_name(name).is_none() {
            warn!(name = %name, "Not a known type; it will likely resolve to nothing");
        }
    }

    let client = Arc::new(PokeApiClient::new()?);
    let pipeline = CatalogPipeline::new(client);
    let store = FavoritesStore::load_default().await;

    let items = pipeline.set_filter(&names).await;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&items)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            if items.is_empty() {
                println!("No items match {}", names.join(" + "));
            } else {
                for item in &items {
                    let is_favorite = store.is_favorite(item.id).await;
                    println!("{}", formatter.format_item_row(item, is_favorite));
                }
                println!("{} item(s) match {}", items.len(), names.join(" + "));
            }
        }
    }

    Ok(())
}
