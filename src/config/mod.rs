// ABOUTME: Configuration management module for server and generator settings
// ABOUTME: Re-exports environment configuration and loads the active recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors
//! Configuration module for Recipe Finder
//!
//! - **Environment**: Server and AI generator configuration from environment variables
//! - **Catalog**: Selection between the built-in catalog and a JSON file

use std::path::Path;

use tracing::info;

/// Environment and server configuration
pub mod environment;

pub use environment::{GeneratorConfig, ServerConfig};

use crate::catalog::Catalog;
use crate::errors::AppResult;

/// Load the catalog from `path`, or the built-in catalog when `None`
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid catalog
pub fn load_catalog(path: Option<&Path>) -> AppResult<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    info!(
        ingredients = catalog.ingredients().len(),
        recipes = catalog.recipes().len(),
        "Catalog ready"
    );
    Ok(catalog)
}
