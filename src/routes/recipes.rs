// ABOUTME: Recipe discovery route handlers for the catalog, matching, and AI generation
// ABOUTME: Thin handlers that delegate to the catalog, matcher, and recipe generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::AppState;
use crate::catalog::parse_ingredient_list;
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::matcher::match_recipes;
use crate::models::{GeneratedRecipe, Ingredient, IngredientId, MatchedRecipe, Recipe};

/// Query string of the recipe search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct RecipeQuery {
    /// Comma-separated ingredient ids; absent or empty lists every recipe
    pub ingredients: Option<String>,
}

/// Selected ingredient echoed back with its display name
#[derive(Debug, Serialize)]
pub struct SelectedIngredient {
    /// Ingredient id as requested
    pub id: IngredientId,
    /// Catalog display name, or the id when unknown
    pub name: String,
}

/// Recipe search response
#[derive(Debug, Serialize)]
pub struct RecipeSearchResponse<'a> {
    /// Normalized selection
    pub selected: Vec<SelectedIngredient>,
    /// Ranked matches (or the whole catalog for an empty selection)
    pub recipes: Vec<MatchedRecipe<'a>>,
}

/// Body of the generation endpoint
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Selected ingredient ids, in selection order
    pub ingredients: Vec<IngredientId>,
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe discovery routes
    pub fn routes() -> Router<Arc<AppState>> {
        Router::new()
            .route(endpoints::INGREDIENTS, get(Self::list_ingredients))
            .route(endpoints::RECIPES, get(Self::search_recipes))
            .route(endpoints::GENERATE, post(Self::generate_recipe))
            .route(endpoints::RECIPE_BY_ID, get(Self::get_recipe))
    }

    async fn list_ingredients(State(state): State<Arc<AppState>>) -> Json<Vec<Ingredient>> {
        Json(state.catalog.ingredients().to_vec())
    }

    async fn search_recipes(
        State(state): State<Arc<AppState>>,
        Query(query): Query<RecipeQuery>,
    ) -> AppResult<Json<serde_json::Value>> {
        let selected_ids = query
            .ingredients
            .as_deref()
            .map(parse_ingredient_list)
            .unwrap_or_default();
        let selection: HashSet<IngredientId> = selected_ids.iter().cloned().collect();
        let recipes = match_recipes(&selection, state.catalog.recipes());

        info!(
            selected = selected_ids.len(),
            matched = recipes.len(),
            "Recipe search"
        );

        let response = RecipeSearchResponse {
            selected: selected_ids
                .iter()
                .map(|id| SelectedIngredient {
                    name: state.catalog.display_name(id.as_str()).to_owned(),
                    id: id.clone(),
                })
                .collect(),
            recipes,
        };
        Ok(Json(serde_json::to_value(response)?))
    }

    async fn get_recipe(
        State(state): State<Arc<AppState>>,
        Path(id): Path<String>,
    ) -> AppResult<Json<Recipe>> {
        state
            .catalog
            .recipe(&id)
            .cloned()
            .map(Json)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))
    }

    async fn generate_recipe(
        State(state): State<Arc<AppState>>,
        body: Result<Json<GenerateRequest>, JsonRejection>,
    ) -> AppResult<Json<GeneratedRecipe>> {
        let Json(request) = body.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        let mut seen = HashSet::new();
        let selected_ids: Vec<IngredientId> = request
            .ingredients
            .into_iter()
            .filter(|id| !id.as_str().trim().is_empty())
            .filter(|id| seen.insert(id.clone()))
            .collect();
        if selected_ids.is_empty() {
            return Err(AppError::invalid_input(
                "At least one ingredient must be selected",
            ));
        }

        let names = state.catalog.display_names(&selected_ids);
        let recipe = state.generator.generate(&selected_ids, &names).await;
        Ok(Json(recipe))
    }
}
