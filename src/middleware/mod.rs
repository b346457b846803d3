// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Builds the tower-http layers wrapped around the recipe router

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::create_request_span;
