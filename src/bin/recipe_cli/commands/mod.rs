// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors
// ABOUTME: Re-exports command modules for recipe-cli
// ABOUTME: Provides access to catalog queries and AI generation commands

pub mod catalog;
pub mod generate;
