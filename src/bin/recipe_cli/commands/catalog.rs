// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors
// ABOUTME: Catalog commands for recipe-cli: list ingredients, match, and show recipes
// ABOUTME: Output is pretty-printed JSON on stdout

use std::collections::HashSet;

use anyhow::{anyhow, Result};
use recipe_finder::{
    catalog::{parse_ingredient_list, Catalog},
    matcher::match_recipes,
    models::IngredientId,
};
use serde_json::json;

use crate::helpers::display::print_json;

/// Print every ingredient
pub fn ingredients(catalog: &Catalog) -> Result<()> {
    print_json(&catalog.ingredients())
}

/// Print the ranked recipes for a comma-separated selection
pub fn match_selection(catalog: &Catalog, ids: Option<&str>) -> Result<()> {
    let selected_ids = ids.map(parse_ingredient_list).unwrap_or_default();
    let selection: HashSet<IngredientId> = selected_ids.iter().cloned().collect();
    let recipes = match_recipes(&selection, catalog.recipes());

    print_json(&json!({
        "selected": selected_ids
            .iter()
            .map(|id| json!({ "id": id, "name": catalog.display_name(id.as_str()) }))
            .collect::<Vec<_>>(),
        "recipes": recipes,
    }))
}

/// Print one recipe
pub fn show(catalog: &Catalog, id: &str) -> Result<()> {
    let recipe = catalog
        .recipe(id)
        .ok_or_else(|| anyhow!("Recipe not found: {id}"))?;
    print_json(recipe)
}
