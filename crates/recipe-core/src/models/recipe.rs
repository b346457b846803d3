// ABOUTME: Catalog recipe model, difficulty levels, and matcher output type
// ABOUTME: Defines Recipe, RecipeIngredientRef, Difficulty, and MatchedRecipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

use serde::{Deserialize, Serialize};

use super::IngredientId;

/// Cooking difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    Easy,
    /// Moderate complexity
    #[default]
    Medium,
    /// Advanced techniques or long preparation
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label, ignoring case and surrounding whitespace
    ///
    /// Returns `None` for anything other than easy, medium or hard.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Ingredient required by a catalog recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredientRef {
    /// Ingredient catalog id
    pub id: IngredientId,
    /// Free-form quantity ("200g", "2 cloves")
    pub amount: String,
}

/// Static catalog recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Required ingredients, in display order
    pub ingredients: Vec<RecipeIngredientRef>,
    /// Cooking steps, in order
    pub steps: Vec<String>,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Estimated cooking time in minutes
    pub time: u32,
    /// Optional cooking tips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

impl Recipe {
    /// Iterate the ids of the required ingredients (duplicates included)
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &IngredientId> {
        self.ingredients.iter().map(|ingredient| &ingredient.id)
    }
}

/// A catalog recipe annotated with how well it matches a selection
///
/// Borrows the catalog entry; serializes as the recipe's fields plus
/// `matchCount` and `matchPercentage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRecipe<'a> {
    /// The matched catalog recipe
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    /// Number of distinct recipe ingredients present in the selection
    pub match_count: usize,
    /// `match_count` divided by the recipe's ingredient count, in `[0, 1]`
    pub match_percentage: f64,
}

impl<'a> MatchedRecipe<'a> {
    /// Wrap a recipe with no match information (browse mode)
    #[must_use]
    pub const fn unmatched(recipe: &'a Recipe) -> Self {
        Self {
            recipe,
            match_count: 0,
            match_percentage: 0.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_label() {
        assert_eq!(Difficulty::from_label("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_label(" hard "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_label("very hard"), None);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_matched_recipe_serializes_flat_camel_case() {
        let recipe = Recipe {
            id: "tomato-egg".to_owned(),
            name: "Tomato and Egg Stir-fry".to_owned(),
            image: "https://example.com/tomato-egg.jpg".to_owned(),
            ingredients: vec![RecipeIngredientRef {
                id: "egg".into(),
                amount: "3".to_owned(),
            }],
            steps: vec!["Scramble".to_owned()],
            difficulty: Difficulty::Easy,
            time: 10,
            tips: None,
        };
        let matched = MatchedRecipe {
            recipe: &recipe,
            match_count: 1,
            match_percentage: 1.0,
        };

        let json = serde_json::to_value(&matched).unwrap();
        assert_eq!(json["id"], "tomato-egg");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["matchCount"], 1);
        assert_eq!(json["matchPercentage"], 1.0);
        assert!(json.get("tips").is_none());
    }
}
