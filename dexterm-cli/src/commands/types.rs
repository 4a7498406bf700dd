//! Types command - list the known type enumeration.

use anyhow::{Context, Result};
use clap::Args;

use dexterm_api::PokeApiClient;
use dexterm_core::TypeKind;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the types command.
#[derive(Args)]
pub struct TypesArgs {
    /// Fetch the live type list from the catalog instead of the
    /// built-in enumeration.
    #[arg(long)]
    pub remote: bool,
}

/// Runs the types command.
pub async fn run(args: &TypesArgs, cli: &Cli) -> Result<()> {
    let names: Vec<String> = if args.remote {
        let client = PokeApiClient::new()?;
        client
            .fetch_category_names()
            .await
            .context("Failed to fetch type list")?
    } else {
        TypeKind::all().iter().map(|t| t.name().to_string()).collect()
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&names)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            for name in &names {
                let known = if TypeKind::from_name(name).is_some() {
                    String::new()
                } else {
                    " (unrecognized)".to_string()
                };
                println!("{}{}", formatter.format_type_chip(name), known);
            }
        }
    }

    Ok(())
}
