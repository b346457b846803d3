// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors
// ABOUTME: Re-exports helper modules for recipe-cli
// ABOUTME: Provides output formatting utilities

pub mod display;
