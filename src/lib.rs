// ABOUTME: Main library entry point for the Recipe Finder service
// ABOUTME: Ingredient catalog, recipe matching, and AI-assisted recipe generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

#![deny(unsafe_code)]

//! # Recipe Finder
//!
//! Given a set of ingredients a user has on hand, Recipe Finder ranks a fixed
//! recipe catalog by ingredient overlap and can ask a chat-completion model to
//! invent a new recipe from the same selection.
//!
//! ## Features
//!
//! - **Recipe matching**: Deterministic ranking by overlap percentage, then overlap count
//! - **AI generation**: One `OpenAI`-compatible request per call, with a fallback recipe
//!   whenever the provider fails or answers with something unusable
//! - **HTTP API**: Axum routes for ingredients, search, lookup, and generation
//! - **CLI**: `recipe-cli` for querying the catalog from a terminal
//!
//! ## Architecture
//!
//! - **Catalog**: Ingredients and recipes, built-in or loaded from JSON
//! - **Matcher**: Pure scoring and ranking over the catalog
//! - **LLM**: Provider trait and the `OpenAI`-compatible HTTP client
//! - **Generator**: Prompt, completion parsing, label resolution, fallback
//! - **Config**: Environment-driven server and generator settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::collections::HashSet;
//!
//! use recipe_finder::catalog::Catalog;
//! use recipe_finder::errors::AppResult;
//! use recipe_finder::matcher::match_recipes;
//! use recipe_finder::models::IngredientId;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = Catalog::builtin()?;
//!     let selected: HashSet<IngredientId> = ["tomato".into(), "egg".into()].into_iter().collect();
//!
//!     for matched in match_recipes(&selected, catalog.recipes()) {
//!         println!("{} ({:.0}%)", matched.recipe.name, matched.match_percentage * 100.0);
//!     }
//!     Ok(())
//! }
//! ```

// ── Shared core types ───────────────────────────────────────────────────

pub use recipe_core::{constants, errors, models};

// ── Public API ──────────────────────────────────────────────────────────

/// Ingredient and recipe catalog
pub mod catalog;

/// Environment configuration
pub mod config;

/// AI recipe generation with fallback
pub mod generator;

/// LLM provider abstraction and `OpenAI`-compatible client
pub mod llm;

/// Logging configuration and structured logging
pub mod logging;

/// Recipe matching and ranking
pub mod matcher;

/// HTTP middleware layers
pub mod middleware;

/// `HTTP` routes
pub mod routes;
