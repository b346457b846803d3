// ABOUTME: Prompt templates for LLM interactions loaded at compile time
// ABOUTME: Builds the creative-recipe prompt from the selected ingredient names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! # Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Template for the creative recipe request; `{ingredients}` is substituted
pub const RECIPE_GENERATION_PROMPT: &str = include_str!("recipe_generation.md");

/// Placeholder replaced by the ingredient list
const INGREDIENTS_PLACEHOLDER: &str = "{ingredients}";

/// Build the recipe generation prompt for the given ingredient display names
#[must_use]
pub fn build_recipe_prompt(ingredient_names: &[String]) -> String {
    RECIPE_GENERATION_PROMPT.replace(INGREDIENTS_PLACEHOLDER, &ingredient_names.join(", "))
}
