// ABOUTME: AI recipe generation service turning a selection into a creative recipe
// ABOUTME: Prompts the chat model, parses its JSON reply, and falls back on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! # Recipe Generator
//!
//! [`RecipeGenerator::generate`] never fails: transport errors, non-2xx
//! statuses, missing content and unparseable completions all produce the
//! deterministic fallback recipe, logged at `warn`.

mod fallback;
mod parser;
mod resolver;

pub use fallback::{fallback_name, fallback_recipe};
pub use parser::parse_generated_recipe;
pub use resolver::{ContainmentResolver, IngredientResolver, ResolverCandidate};

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::errors::AppResult;
use crate::llm::{
    build_recipe_prompt, ChatMessage, ChatRequest, LlmProvider, OpenAiCompatibleProvider,
};
use crate::models::{GeneratedRecipe, IngredientId};

/// Per-request sampling settings
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum completion tokens
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for GenerationSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Generates creative recipes through an [`LlmProvider`]
pub struct RecipeGenerator {
    provider: Arc<dyn LlmProvider>,
    catalog: Arc<Catalog>,
    resolver: Box<dyn IngredientResolver>,
    settings: GenerationSettings,
}

impl RecipeGenerator {
    /// Create a generator with the default containment resolver
    #[must_use]
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        catalog: Arc<Catalog>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            provider,
            catalog,
            resolver: Box::new(ContainmentResolver),
            settings,
        }
    }

    /// Replace the ingredient label resolver
    #[must_use]
    pub fn with_resolver(mut self, resolver: Box<dyn IngredientResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Build a generator backed by the `OpenAI`-compatible HTTP provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn from_config(config: &GeneratorConfig, catalog: Arc<Catalog>) -> AppResult<Self> {
        let provider = OpenAiCompatibleProvider::new(config.provider_config())?;
        Ok(Self::new(
            Arc::new(provider),
            catalog,
            GenerationSettings::from(config),
        ))
    }

    /// Generate a recipe for the selected ingredients
    ///
    /// `selected_names` are the display names used in the prompt and in the
    /// fallback name; when empty they are derived from the catalog.
    #[instrument(skip_all, fields(provider = self.provider.name(), selected = selected_ids.len()))]
    pub async fn generate(
        &self,
        selected_ids: &[IngredientId],
        selected_names: &[String],
    ) -> GeneratedRecipe {
        let derived;
        let names: &[String] = if selected_names.is_empty() {
            derived = self.catalog.display_names(selected_ids);
            &derived
        } else {
            selected_names
        };

        match self.try_generate(selected_ids, names).await {
            Ok(recipe) => {
                debug!(name = %recipe.name, "Generated recipe");
                recipe
            }
            Err(error) => {
                warn!(error = %error, "Recipe generation failed, using fallback recipe");
                fallback_recipe(selected_ids, names)
            }
        }
    }

    async fn try_generate(
        &self,
        selected_ids: &[IngredientId],
        names: &[String],
    ) -> AppResult<GeneratedRecipe> {
        let request = ChatRequest::new(vec![ChatMessage::user(build_recipe_prompt(names))])
            .with_model(self.settings.model.as_str())
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens)
            .with_json_mode();

        let response = self.provider.complete(&request).await?;

        let candidates: Vec<ResolverCandidate<'_>> = selected_ids
            .iter()
            .map(|id| ResolverCandidate {
                id,
                name: self.catalog.display_name(id.as_str()),
            })
            .collect();

        parse_generated_recipe(
            &response.content,
            &candidates,
            self.resolver.as_ref(),
            &fallback_name(names),
        )
    }
}
