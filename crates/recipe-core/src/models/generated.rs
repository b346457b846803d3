// ABOUTME: Recipe record produced by the AI generator
// ABOUTME: Same shape as a catalog recipe minus id and image
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

use serde::{Deserialize, Serialize};

use super::{Difficulty, IngredientId};

/// Ingredient line of a generated recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIngredient {
    /// Resolved catalog id, or `other-<index>` when nothing matched
    pub id: IngredientId,
    /// Free-form quantity
    pub amount: String,
    /// Label the provider used for this ingredient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Recipe synthesized by the AI generator (or its fallback)
///
/// Never written back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Recipe name
    pub name: String,
    /// Ingredient lines
    pub ingredients: Vec<GeneratedIngredient>,
    /// Cooking steps, in order
    pub steps: Vec<String>,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Estimated cooking time in minutes
    pub time: u32,
    /// Cooking tips
    pub tips: Vec<String>,
}
