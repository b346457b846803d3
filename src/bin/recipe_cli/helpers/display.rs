// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors
// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Pretty-prints command results as JSON on stdout

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON followed by a newline
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
