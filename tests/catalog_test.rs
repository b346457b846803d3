// ABOUTME: Integration tests for catalog loading and lookups
// ABOUTME: Covers built-in data integrity, JSON files, duplicate detection, and name fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;
use std::fs;

use recipe_finder::catalog::Catalog;
use recipe_finder::config::load_catalog;
use recipe_finder::errors::ErrorCode;
use recipe_finder::models::{Difficulty, IngredientCategory, IngredientId};

const SMALL_CATALOG: &str = r#"{
    "ingredients": [
        {"id": "tofu", "name": "Tofu", "category": "protein"},
        {"id": "leek", "name": "Leek"}
    ],
    "recipes": [
        {
            "id": "leek-tofu",
            "name": "Leek Tofu",
            "image": "/images/leek-tofu.jpg",
            "ingredients": [
                {"id": "tofu", "amount": "1 block"},
                {"id": "leek", "amount": "1 stalk"}
            ],
            "steps": ["Slice", "Fry"],
            "difficulty": "easy",
            "time": 12
        }
    ]
}"#;

// ============================================================================
// Built-in catalog
// ============================================================================

#[test]
fn test_builtin_catalog_references_only_known_ingredients() {
    let catalog = Catalog::builtin().unwrap();

    for recipe in catalog.recipes() {
        assert!(!recipe.ingredients.is_empty(), "{} has no ingredients", recipe.id);
        assert!(recipe.time > 0);
        for id in recipe.ingredient_ids() {
            assert!(
                catalog.ingredient(id.as_str()).is_some(),
                "{} references unknown ingredient {id}",
                recipe.id
            );
        }
    }
}

#[test]
fn test_builtin_catalog_ids_are_unique() {
    let catalog = Catalog::builtin().unwrap();

    let ingredient_ids: HashSet<&IngredientId> =
        catalog.ingredients().iter().map(|i| &i.id).collect();
    assert_eq!(ingredient_ids.len(), catalog.ingredients().len());

    let recipe_ids: HashSet<&str> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(recipe_ids.len(), catalog.recipes().len());
}

#[test]
fn test_builtin_recipe_lookup() {
    let catalog = Catalog::builtin().unwrap();

    let recipe = catalog.recipe("tomato-egg-stir-fry").unwrap();
    assert_eq!(recipe.difficulty, Difficulty::Easy);
    assert!(recipe.tips.is_some());
    assert!(catalog.recipe("shredded-potato").unwrap().tips.is_none());
    assert!(catalog.recipe("does-not-exist").is_none());
}

// ============================================================================
// JSON and file loading
// ============================================================================

#[test]
fn test_from_json_applies_category_default() {
    let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();

    assert_eq!(
        catalog.ingredient("tofu").unwrap().category,
        IngredientCategory::Protein
    );
    assert_eq!(
        catalog.ingredient("leek").unwrap().category,
        IngredientCategory::Other
    );
    assert_eq!(catalog.recipe("leek-tofu").unwrap().time, 12);
}

#[test]
fn test_from_json_rejects_duplicate_ingredient_ids() {
    let json = r#"{
        "ingredients": [
            {"id": "tofu", "name": "Tofu"},
            {"id": "tofu", "name": "Silken Tofu"}
        ],
        "recipes": []
    }"#;

    let error = Catalog::from_json(json).unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("tofu"));
}

#[test]
fn test_from_json_rejects_duplicate_recipe_ids() {
    let recipe = r#"{"id": "r", "name": "R", "image": "", "ingredients": [], "steps": [], "difficulty": "easy", "time": 5}"#;
    let json = format!(r#"{{"ingredients": [], "recipes": [{recipe}, {recipe}]}}"#);

    let error = Catalog::from_json(&json).unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_from_json_malformed_document() {
    let error = Catalog::from_json("{\"ingredients\": 3}").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_load_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, SMALL_CATALOG).unwrap();

    let catalog = load_catalog(Some(&path)).unwrap();

    assert_eq!(catalog.ingredients().len(), 2);
    assert_eq!(catalog.recipes().len(), 1);
}

#[test]
fn test_load_catalog_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();

    let error = load_catalog(Some(&dir.path().join("missing.json"))).unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
fn test_load_catalog_defaults_to_builtin() {
    let catalog = load_catalog(None).unwrap();
    assert_eq!(
        catalog.recipes().len(),
        Catalog::builtin().unwrap().recipes().len()
    );
}

// ============================================================================
// Display names
// ============================================================================

#[test]
fn test_display_names_follow_selection_order() {
    let catalog = Catalog::builtin().unwrap();
    let ids: Vec<IngredientId> = vec!["mushroom".into(), "unknown-herb".into(), "tofu".into()];

    assert_eq!(
        catalog.display_names(&ids),
        ["Shiitake Mushroom", "unknown-herb", "Tofu"]
    );
}
