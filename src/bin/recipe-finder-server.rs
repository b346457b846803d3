// ABOUTME: HTTP server binary exposing ingredient search and AI recipe generation
// ABOUTME: Loads environment configuration, builds the router, and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! # Recipe Finder Server Binary

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_finder::{
    config::{load_catalog, ServerConfig},
    generator::RecipeGenerator,
    logging,
    routes::{router, AppState},
};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "recipe-finder-server")]
#[command(about = "Recipe Finder - ingredient-driven recipe search and AI recipe ideas")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the catalog file
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }

    info!("{}", config.summary());
    if config.generator.api_key.is_none() {
        warn!("No AI API key configured; generation requests will likely return the fallback recipe");
    }

    let catalog = Arc::new(load_catalog(config.catalog_path.as_deref())?);
    let generator = Arc::new(RecipeGenerator::from_config(
        &config.generator,
        Arc::clone(&catalog),
    )?);
    let app = router(
        AppState::new(catalog, generator),
        &config.cors_allowed_origins,
    );

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
}
