// ABOUTME: Best-effort parsing of the model's JSON completion into a GeneratedRecipe
// ABOUTME: Applies field aliases and defaults, and resolves ingredient labels to ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! Completion parsing
//!
//! The completion must be a JSON object (optionally wrapped in a markdown code
//! fence). Every field is optional; absent or unusable values fall back to:
//!
//! | field        | default                         |
//! |--------------|---------------------------------|
//! | `name`       | fallback naming rule            |
//! | `steps`      | empty                           |
//! | `difficulty` | medium                          |
//! | `time`       | 30 minutes                      |
//! | `tips`       | empty                           |
//!
//! A value of the wrong JSON type for `ingredients`, `steps` or `tips` is a
//! structural error.

use serde::Deserialize;
use serde_json::Value;

use super::resolver::{IngredientResolver, ResolverCandidate};
use crate::constants::{fallback, generation};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{Difficulty, GeneratedIngredient, GeneratedRecipe, IngredientId};

#[derive(Debug, Deserialize)]
struct RawRecipe {
    name: Option<Value>,
    ingredients: Option<Vec<RawIngredient>>,
    steps: Option<Vec<String>>,
    difficulty: Option<Value>,
    time: Option<Value>,
    tips: Option<Vec<String>>,
}

/// Ingredient entry as the model wrote it
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawIngredient {
    Detailed {
        name: Option<String>,
        ingredient: Option<String>,
        amount: Option<Value>,
        quantity: Option<Value>,
    },
    Label(String),
}

impl RawIngredient {
    /// Non-empty labels in preference order: `name`, then `ingredient`
    fn labels(&self) -> Vec<&str> {
        match self {
            Self::Detailed {
                name, ingredient, ..
            } => [name.as_deref(), ingredient.as_deref()]
                .into_iter()
                .filter_map(non_empty)
                .collect(),
            Self::Label(label) => non_empty(Some(label.as_str())).into_iter().collect(),
        }
    }

    fn amount(&self) -> Option<String> {
        match self {
            Self::Detailed {
                amount, quantity, ..
            } => value_text(amount.as_ref()).or_else(|| value_text(quantity.as_ref())),
            Self::Label(_) => None,
        }
    }
}

/// Parse a completion into a recipe
///
/// `default_name` is used when the model omits the name.
///
/// # Errors
///
/// Returns an `InvalidFormat` error when the completion is not a JSON object or
/// a field has an unusable type.
pub fn parse_generated_recipe(
    content: &str,
    candidates: &[ResolverCandidate<'_>],
    resolver: &dyn IngredientResolver,
    default_name: &str,
) -> AppResult<GeneratedRecipe> {
    let value: Value = serde_json::from_str(strip_code_fence(content)).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("completion is not valid JSON: {e}"),
        )
        .with_source(e)
    })?;

    if !value.is_object() {
        return Err(AppError::new(
            ErrorCode::InvalidFormat,
            "completion JSON is not an object",
        ));
    }

    let raw: RawRecipe = serde_json::from_value(value).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("completion has an unexpected shape: {e}"),
        )
        .with_source(e)
    })?;

    let name = raw
        .name
        .as_ref()
        .and_then(|name| non_empty(name.as_str()))
        .map_or_else(|| default_name.to_owned(), str::to_owned);

    let ingredients = raw
        .ingredients
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, entry)| resolve_ingredient(index, entry, candidates, resolver))
        .collect();

    let difficulty = raw
        .difficulty
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Difficulty::from_label)
        .unwrap_or_default();

    Ok(GeneratedRecipe {
        name,
        ingredients,
        steps: raw.steps.unwrap_or_default(),
        difficulty,
        time: parse_minutes(raw.time.as_ref()).unwrap_or(generation::DEFAULT_TIME_MINUTES),
        tips: raw.tips.unwrap_or_default(),
    })
}

fn resolve_ingredient(
    index: usize,
    entry: &RawIngredient,
    candidates: &[ResolverCandidate<'_>],
    resolver: &dyn IngredientResolver,
) -> GeneratedIngredient {
    let labels = entry.labels();
    let id = labels
        .iter()
        .find_map(|label| resolver.resolve(label, candidates))
        .unwrap_or_else(|| {
            IngredientId::new(format!("{}-{index}", generation::UNMATCHED_ID_PREFIX))
        });

    GeneratedIngredient {
        id,
        amount: entry
            .amount()
            .unwrap_or_else(|| fallback::AMOUNT_TO_TASTE.to_owned()),
        name: Some(
            labels
                .first()
                .copied()
                .unwrap_or(fallback::UNNAMED_INGREDIENT)
                .to_owned(),
        ),
    }
}

/// Minutes from a number or a string with a leading integer ("25 minutes")
///
/// Zero, negative and non-numeric values yield `None`.
fn parse_minutes(value: Option<&Value>) -> Option<u32> {
    let minutes = match value? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|minutes| minutes.trunc() as i64))?,
        Value::String(text) => leading_integer(text)?,
        _ => return None,
    };
    u32::try_from(minutes).ok().filter(|&minutes| minutes > 0)
}

fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Remove a surrounding markdown code fence
///
/// The rest of the opening line is dropped only when it is a bare language
/// tag such as `json`; content starting on that line is kept.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    match inner.split_once('\n') {
        Some((tag, rest)) if is_language_tag(tag.trim()) => rest.trim(),
        _ => inner.trim(),
    }
}

fn is_language_tag(tag: &str) -> bool {
    tag.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

fn value_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => non_empty(Some(text.as_str())).map(str::to_owned),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
