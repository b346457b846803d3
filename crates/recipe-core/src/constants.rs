// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, generation defaults, and fallback recipe texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Service identification
pub mod service_names {
    /// Name used in structured logs and the CLI banner
    pub const RECIPE_FINDER: &str = "recipe-finder";
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Base URL of the chat-completion API (without `/chat/completions`)
    pub const AI_BASE_URL: &str = "RECIPE_AI_BASE_URL";
    /// Bearer token for the chat-completion API
    pub const AI_API_KEY: &str = "RECIPE_AI_API_KEY";
    /// Model identifier sent with every request
    pub const AI_MODEL: &str = "RECIPE_AI_MODEL";
    /// Sampling temperature
    pub const AI_TEMPERATURE: &str = "RECIPE_AI_TEMPERATURE";
    /// Maximum completion tokens
    pub const AI_MAX_TOKENS: &str = "RECIPE_AI_MAX_TOKENS";
    /// Whole-request timeout in seconds
    pub const AI_TIMEOUT_SECS: &str = "RECIPE_AI_TIMEOUT_SECS";
    /// HTTP bind host
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// HTTP bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Optional path to a JSON catalog replacing the built-in one
    pub const CATALOG_PATH: &str = "RECIPE_CATALOG_PATH";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Defaults for the AI recipe generator
pub mod generation {
    /// Default chat-completion base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";
    /// Default model identifier
    pub const DEFAULT_MODEL: &str = "THUDM/glm-4-9b-chat";
    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    /// Default completion token budget
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;
    /// Default whole-request timeout
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Endpoint path appended to the base URL
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "chat/completions";
    /// Cooking time used when the provider omits or garbles it
    pub const DEFAULT_TIME_MINUTES: u32 = 30;
    /// Prefix for ingredients the provider returned that match no selection
    pub const UNMATCHED_ID_PREFIX: &str = "other";
}

/// Texts of the deterministic fallback recipe
pub mod fallback {
    /// Name prefix shared by the fallback and the missing-name default
    pub const NAME_PREFIX: &str = "AI creative dish: ";
    /// Appended to the name when more than one ingredient is selected
    pub const MIXED_SUFFIX: &str = " mixed";
    /// Amount used when none is known
    pub const AMOUNT_TO_TASTE: &str = "to taste";
    /// Label for provider ingredients that carry no name
    pub const UNNAMED_INGREDIENT: &str = "other";
    /// Generic three-step procedure
    pub const STEPS: [&str; 3] = ["Prepare all ingredients", "Cook to taste", "Plate and serve"];
    /// Generic tips
    pub const TIPS: [&str; 2] = [
        "Adjust the seasoning to your own taste",
        "Try different cooking methods with the same ingredients",
    ];
}

/// HTTP route paths
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Ingredient listing
    pub const INGREDIENTS: &str = "/api/ingredients";
    /// Recipe search and listing
    pub const RECIPES: &str = "/api/recipes";
    /// Single recipe lookup
    pub const RECIPE_BY_ID: &str = "/api/recipes/:id";
    /// AI recipe generation
    pub const GENERATE: &str = "/api/recipes/generate";
}
