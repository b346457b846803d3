// ABOUTME: Catalog and generation data models shared across the workspace
// ABOUTME: Re-exports ingredient, recipe, and generated recipe types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! # Data Models
//!
//! - **ingredient**: `IngredientId`, `Ingredient`, `IngredientCategory`
//! - **recipe**: catalog `Recipe`, its ingredient references, and `MatchedRecipe`
//! - **generated**: `GeneratedRecipe` produced by the AI generator

mod generated;
mod ingredient;
mod recipe;

pub use generated::{GeneratedIngredient, GeneratedRecipe};
pub use ingredient::{Ingredient, IngredientCategory, IngredientId};
pub use recipe::{Difficulty, MatchedRecipe, Recipe, RecipeIngredientRef};
