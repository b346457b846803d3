// ABOUTME: Route module organization for Recipe Finder HTTP endpoints
// ABOUTME: Assembles health and recipe routes with shared state and tower-http layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! Route module for Recipe Finder
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the catalog, matcher, and generator.

/// Health check and system status routes
pub mod health;
/// Ingredient, recipe search, and generation routes
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;

use std::sync::Arc;

use axum::{body::Body, Router};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::generator::RecipeGenerator;
use crate::middleware::{create_request_span, setup_cors};

/// Shared state handed to every handler
pub struct AppState {
    /// Immutable recipe catalog
    pub catalog: Arc<Catalog>,
    /// AI recipe generator
    pub generator: Arc<RecipeGenerator>,
}

impl AppState {
    /// Create shared state
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>, generator: Arc<RecipeGenerator>) -> Self {
        Self { catalog, generator }
    }
}

/// Build the complete application router
#[must_use]
pub fn router(state: AppState, cors_allowed_origins: &str) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RecipeRoutes::routes())
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
        .layer(setup_cors(cors_allowed_origins))
        .with_state(Arc::new(state))
}
