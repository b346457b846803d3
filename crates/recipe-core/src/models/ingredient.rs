// ABOUTME: Ingredient identifier newtype and ingredient catalog entry
// ABOUTME: IngredientId is an opaque string compared by equality only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque ingredient identifier, unique within the ingredient catalog
///
/// Selections may contain ids the catalog does not know; matching only ever
/// compares ids for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl IngredientId {
    /// Wrap a raw identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for IngredientId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IngredientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IngredientId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for IngredientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Broad grouping used when listing the ingredient catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Vegetables and fungi
    Vegetable,
    /// Meat, seafood, eggs and tofu
    Protein,
    /// Rice, noodles, flour
    Staple,
    /// Sauces, spices and condiments
    Seasoning,
    /// Anything else
    #[default]
    Other,
}

/// Ingredient catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog identifier
    pub id: IngredientId,
    /// Display name
    pub name: String,
    /// Listing group
    #[serde(default)]
    pub category: IngredientCategory,
}
