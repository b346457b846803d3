// ABOUTME: Recipe CLI - command-line access to the ingredient catalog and recipe generator
// ABOUTME: Lists ingredients, ranks recipes for a selection, and requests AI recipe ideas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors
//!
//! Usage:
//! ```bash
//! # List the ingredient catalog
//! recipe-cli ingredients
//!
//! # Rank recipes for a selection (comma-separated ids)
//! recipe-cli match tomato,egg
//!
//! # Browse every recipe
//! recipe-cli match
//!
//! # Show a single recipe
//! recipe-cli show tomato-egg-stir-fry
//!
//! # Ask the model for a new recipe
//! RECIPE_AI_API_KEY=sk-... recipe-cli generate tofu mushroom
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_finder::{config::load_catalog, constants::env_vars, logging::LoggingConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe Finder CLI",
    long_about = "Query the recipe catalog, rank recipes for the ingredients you have, and ask an AI model for new ideas."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog file override (defaults to RECIPE_CATALOG_PATH, then the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List every ingredient in the catalog
    Ingredients,

    /// Rank catalog recipes by overlap with the selected ingredients
    Match {
        /// Comma-separated ingredient ids; omit to list every recipe
        ids: Option<String>,
    },

    /// Show one recipe by id
    Show {
        /// Recipe id
        id: String,
    },

    /// Generate a creative recipe with the configured AI model
    Generate {
        /// Selected ingredient ids, in order
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("Recipe Finder CLI");

    let catalog_path = cli
        .catalog
        .or_else(|| env::var(env_vars::CATALOG_PATH).ok().map(PathBuf::from));
    let catalog = load_catalog(catalog_path.as_deref())?;

    match cli.command {
        Command::Ingredients => commands::catalog::ingredients(&catalog)?,
        Command::Match { ids } => commands::catalog::match_selection(&catalog, ids.as_deref())?,
        Command::Show { id } => commands::catalog::show(&catalog, &id)?,
        Command::Generate { ids } => commands::generate::generate(catalog, &ids).await?,
    }

    Ok(())
}
