// ABOUTME: Maps ingredient labels returned by the model back to selected catalog ids
// ABOUTME: Default strategy is case-insensitive substring containment in both directions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

use crate::models::IngredientId;

/// A selected ingredient the resolver may map a label to
#[derive(Debug, Clone, Copy)]
pub struct ResolverCandidate<'a> {
    /// Selected ingredient id
    pub id: &'a IngredientId,
    /// Its catalog display name (the raw id when unknown)
    pub name: &'a str,
}

/// Strategy for resolving a model-provided ingredient label to a selected id
pub trait IngredientResolver: Send + Sync {
    /// Return the id of the first matching candidate, if any
    fn resolve(&self, label: &str, candidates: &[ResolverCandidate<'_>]) -> Option<IngredientId>;
}

/// Matches when the label contains the candidate name or the name contains the label
///
/// Ambiguous for short or overlapping names ("egg" vs "eggplant"); the first
/// candidate in selection order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentResolver;

impl IngredientResolver for ContainmentResolver {
    fn resolve(&self, label: &str, candidates: &[ResolverCandidate<'_>]) -> Option<IngredientId> {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return None;
        }

        candidates
            .iter()
            .find(|candidate| {
                let name = candidate.name.trim().to_lowercase();
                !name.is_empty() && (label.contains(&name) || name.contains(&label))
            })
            .map(|candidate| candidate.id.clone())
    }
}
