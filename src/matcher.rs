// ABOUTME: Ranks catalog recipes by overlap with a set of selected ingredients
// ABOUTME: Pure, deterministic set-intersection matching with a stable ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! # Recipe Matcher
//!
//! `match_recipes` annotates catalog recipes with how many of their required
//! ingredients appear in the user's selection and orders them by relevance:
//!
//! - An empty selection browses the whole catalog in catalog order, every
//!   recipe with a zero match.
//! - Otherwise recipes sharing no ingredient with the selection are dropped,
//!   and the rest are ordered by match percentage, then match count, both
//!   descending. Remaining ties keep catalog order.
//!
//! Selections may contain ids the ingredient catalog does not know; matching
//! compares ids for equality only.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{IngredientId, MatchedRecipe, Recipe};

/// Match a selection against the recipe catalog
#[must_use]
pub fn match_recipes<'a>(
    selected: &HashSet<IngredientId>,
    catalog: &'a [Recipe],
) -> Vec<MatchedRecipe<'a>> {
    if selected.is_empty() {
        return catalog.iter().map(MatchedRecipe::unmatched).collect();
    }

    let mut matches: Vec<MatchedRecipe<'a>> = catalog
        .iter()
        .map(|recipe| score_recipe(selected, recipe))
        .filter(|matched| matched.match_count > 0)
        .collect();

    // sort_by is stable, so equal keys keep catalog order
    matches.sort_by(compare_relevance);
    matches
}

/// Compute the match annotation for one recipe
///
/// Recipe ingredients are deduplicated by id before counting; the percentage
/// divides by the full ingredient list and is zero for a recipe without
/// ingredients.
#[must_use]
pub fn score_recipe<'a>(
    selected: &HashSet<IngredientId>,
    recipe: &'a Recipe,
) -> MatchedRecipe<'a> {
    let match_count = recipe
        .ingredient_ids()
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|id| selected.contains(*id))
        .count();

    let total = recipe.ingredients.len();
    let match_percentage = if total == 0 {
        0.0
    } else {
        match_count as f64 / total as f64
    };

    MatchedRecipe {
        recipe,
        match_count,
        match_percentage,
    }
}

/// Descending by percentage, then by count
fn compare_relevance(a: &MatchedRecipe<'_>, b: &MatchedRecipe<'_>) -> Ordering {
    b.match_percentage
        .total_cmp(&a.match_percentage)
        .then_with(|| b.match_count.cmp(&a.match_count))
}
