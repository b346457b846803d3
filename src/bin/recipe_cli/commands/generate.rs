// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors
// ABOUTME: Generation command for recipe-cli backed by the configured AI provider
// ABOUTME: Reads RECIPE_AI_* settings and always prints a recipe, falling back on failure

use std::sync::Arc;

use anyhow::{bail, Result};
use recipe_finder::{
    catalog::{parse_ingredient_list, Catalog},
    config::GeneratorConfig,
    generator::RecipeGenerator,
};
use tracing::info;

use crate::helpers::display::print_json;

/// Generate and print a recipe for the given ids
///
/// Each argument may itself be a comma-separated list.
pub async fn generate(catalog: Catalog, ids: &[String]) -> Result<()> {
    let selected_ids = parse_ingredient_list(&ids.join(","));
    if selected_ids.is_empty() {
        bail!("At least one ingredient id is required");
    }

    let config = GeneratorConfig::from_env()?;
    let catalog = Arc::new(catalog);
    let generator = RecipeGenerator::from_config(&config, Arc::clone(&catalog))?;
    info!(model = %config.model, "Requesting recipe");

    let names = catalog.display_names(&selected_ids);
    let recipe = generator.generate(&selected_ids, &names).await;
    print_json(&recipe)
}
