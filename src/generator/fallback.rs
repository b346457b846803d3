// ABOUTME: Deterministic placeholder recipe returned when AI generation fails
// ABOUTME: Also owns the naming rule used when the provider omits a recipe name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

use crate::constants::{fallback, generation};
use crate::models::{Difficulty, GeneratedIngredient, GeneratedRecipe, IngredientId};

/// Name for a recipe built from the given selection
///
/// `"AI creative dish: <first name>"`, with `" mixed"` appended when more
/// than one ingredient was selected.
#[must_use]
pub fn fallback_name(selected_names: &[String]) -> String {
    let first = selected_names.first().map_or("", String::as_str);
    let suffix = if selected_names.len() > 1 {
        fallback::MIXED_SUFFIX
    } else {
        ""
    };
    format!("{}{first}{suffix}", fallback::NAME_PREFIX)
}

/// Placeholder recipe for a failed generation
#[must_use]
pub fn fallback_recipe(
    selected_ids: &[IngredientId],
    selected_names: &[String],
) -> GeneratedRecipe {
    GeneratedRecipe {
        name: fallback_name(selected_names),
        ingredients: selected_ids
            .iter()
            .map(|id| GeneratedIngredient {
                id: id.clone(),
                amount: fallback::AMOUNT_TO_TASTE.to_owned(),
                name: None,
            })
            .collect(),
        steps: fallback::STEPS.iter().map(|&step| step.to_owned()).collect(),
        difficulty: Difficulty::Medium,
        time: generation::DEFAULT_TIME_MINUTES,
        tips: fallback::TIPS.iter().map(|&tip| tip.to_owned()).collect(),
    }
}
