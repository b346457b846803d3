// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Reports liveness plus the size of the loaded recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! Health check routes for service monitoring

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use super::AppState;
use crate::constants::{endpoints, service_names};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router<Arc<AppState>> {
        Router::new().route(endpoints::HEALTH_CHECK, get(Self::health))
    }

    async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::RECIPE_FINDER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
            "catalog": {
                "ingredients": state.catalog.ingredients().len(),
                "recipes": state.catalog.recipes().len(),
            }
        }))
    }
}
