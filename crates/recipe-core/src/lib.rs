// ABOUTME: Core types and constants for the recipe finder service
// ABOUTME: Foundation crate with error handling, catalog models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe finder
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **models**: Ingredient, recipe, matched recipe and generated recipe types
//! - **constants**: Environment variable names, generation defaults, and fallback texts

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Catalog and generation data models
pub mod models;
