//! Fav command - favorites management.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use dexterm_api::PokeApiClient;
use dexterm_store::FavoritesStore;

use crate::output::{JsonFormatter, TextFormatter, text::capitalize};
use crate::{Cli, OutputFormat};

/// Arguments for the fav command.
#[derive(Args)]
pub struct FavArgs {
    #[command(subcommand)]
    pub command: FavCommand,
}

/// Favorites subcommands.
#[derive(Subcommand)]
pub enum FavCommand {
    /// Add an item to the favorites, by id or name.
    Add {
        /// Item id or slug name.
        query: String,
    },
    /// Remove an item from the favorites.
    Rm {
        /// Item id.
        id: u32,
    },
    /// List favorites, most recently added first.
    List,
    /// Remove all favorites.
    Clear,
}

/// Runs the fav command.
pub async fn run(args: &FavArgs, cli: &Cli) -> Result<()> {
    let store = FavoritesStore::load_default().await;

    match &args.command {
        FavCommand::Add { query } => {
            let client = PokeApiClient::new()?;
            let item = client
                .fetch_item_detail(&query.to_lowercase())
                .await
                .with_context(|| format!("Failed to fetch details for '{query}'"))?;

            if store.is_favorite(item.id).await {
                println!("{} is already a favorite", capitalize(&item.name));
            } else {
                store.add(&item).await;
                println!("{} added to favorites", capitalize(&item.name));
            }
        }
        FavCommand::Rm { id } => {
            if store.is_favorite(*id).await {
                store.remove(*id).await;
                println!("#{id} removed from favorites");
            } else {
                println!("#{id} is not a favorite");
            }
        }
        FavCommand::List => {
            let mut favorites = store.favorites().await;
            favorites.sort_by(|a, b| b.date_added.cmp(&a.date_added));

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", JsonFormatter::new(cli.pretty).format(&favorites)?);
                }
                OutputFormat::Text => {
                    if favorites.is_empty() {
                        println!("No favorites yet. Try `dexterm fav add pikachu`.");
                    } else {
                        let formatter = TextFormatter::new(!cli.no_color);
                        for record in &favorites {
                            println!("{}", formatter.format_favorite_row(record));
                        }
                    }
                }
            }
        }
        FavCommand::Clear => {
            let count = store.len().await;
            store.clear().await;
            println!("Removed {count} favorite(s)");
        }
    }

    Ok(())
}
