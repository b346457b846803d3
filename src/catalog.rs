// ABOUTME: Static ingredient and recipe catalog loaded once at startup
// ABOUTME: Provides id lookups, display-name fallback, and selection parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! # Catalog
//!
//! The catalog is read-only for the lifetime of the process and is shared
//! between the matcher, the generator, and the routes through an `Arc`.
//!
//! The built-in catalog is embedded at compile time from `data/catalog.json`;
//! a deployment may replace it with its own JSON file of the same shape.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::{Ingredient, IngredientId, Recipe};

/// Catalog shipped with the binary
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// On-disk catalog document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
}

/// Read-only ingredient and recipe catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
    ingredient_index: HashMap<IngredientId, usize>,
    recipe_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed entries
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if an ingredient id or a recipe id
    /// appears more than once.
    pub fn new(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>) -> AppResult<Self> {
        let mut ingredient_index = HashMap::with_capacity(ingredients.len());
        for (position, ingredient) in ingredients.iter().enumerate() {
            if ingredient_index
                .insert(ingredient.id.clone(), position)
                .is_some()
            {
                return Err(AppError::config_invalid(format!(
                    "duplicate ingredient id in catalog: {}",
                    ingredient.id
                )));
            }
        }

        let mut recipe_index = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if recipe_index.insert(recipe.id.clone(), position).is_some() {
                return Err(AppError::config_invalid(format!(
                    "duplicate recipe id in catalog: {}",
                    recipe.id
                )));
            }
            for id in recipe.ingredient_ids() {
                if !ingredient_index.contains_key(id) {
                    debug!(
                        recipe = %recipe.id,
                        ingredient = %id,
                        "recipe references unknown ingredient"
                    );
                }
            }
        }

        Ok(Self {
            ingredients,
            recipes,
            ingredient_index,
            recipe_index,
        })
    }

    /// Load the catalog embedded in the binary
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document is malformed.
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    /// Parse a catalog from a JSON document `{ "ingredients": [...], "recipes": [...] }`
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON and a `ConfigInvalid`
    /// error for duplicate ids.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.ingredients, document.recipes)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a config error if the file cannot be read, otherwise the same
    /// errors as [`Catalog::from_json`].
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read catalog {}: {e}", path.display())).with_source(e)
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            ingredients = catalog.ingredients.len(),
            recipes = catalog.recipes.len(),
            "Loaded catalog from file"
        );
        Ok(catalog)
    }

    /// All ingredients, in catalog order
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// All recipes, in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up an ingredient by id
    #[must_use]
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredient_index
            .get(id)
            .map(|&position| &self.ingredients[position])
    }

    /// Display name of a known ingredient
    #[must_use]
    pub fn ingredient_name(&self, id: &str) -> Option<&str> {
        self.ingredient(id).map(|ingredient| ingredient.name.as_str())
    }

    /// Display name of an ingredient, echoing the raw id when it is unknown
    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.ingredient_name(id).unwrap_or(id)
    }

    /// Display names for a selection, in selection order
    #[must_use]
    pub fn display_names(&self, ids: &[IngredientId]) -> Vec<String> {
        ids.iter()
            .map(|id| self.display_name(id.as_str()).to_owned())
            .collect()
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipe_index
            .get(id)
            .map(|&position| &self.recipes[position])
    }
}

/// Split a comma-separated ingredient selection such as `tofu, mushroom,,egg`
///
/// Blank entries are dropped and repeated ids keep their first position.
#[must_use]
pub fn parse_ingredient_list(raw: &str) -> Vec<IngredientId> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(*id))
        .map(IngredientId::from)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.ingredients().is_empty());
        assert!(!catalog.recipes().is_empty());
        assert_eq!(catalog.ingredient_name("tofu"), Some("Tofu"));
    }

    #[test]
    fn test_display_name_echoes_unknown_id() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.display_name("dragon-fruit"), "dragon-fruit");
    }

    #[test]
    fn test_parse_ingredient_list() {
        let ids = parse_ingredient_list(" tofu,mushroom,, tofu ,egg,");
        let raw: Vec<&str> = ids.iter().map(IngredientId::as_str).collect();
        assert_eq!(raw, ["tofu", "mushroom", "egg"]);
        assert!(parse_ingredient_list("").is_empty());
    }
}
