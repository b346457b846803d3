// ABOUTME: Criterion benchmarks for recipe matching and completion parsing
// ABOUTME: Measures ranking over synthetic catalogs of increasing size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Finder Contributors

//! Criterion benchmarks for the matcher and the completion parser.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_finder::catalog::Catalog;
use recipe_finder::generator::{parse_generated_recipe, ContainmentResolver, ResolverCandidate};
use recipe_finder::matcher::match_recipes;
use recipe_finder::models::{Difficulty, IngredientId, Recipe, RecipeIngredientRef};

const INGREDIENT_POOL: usize = 60;

fn synthetic_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|n| Recipe {
            id: format!("recipe-{n}"),
            name: format!("Recipe {n}"),
            image: String::new(),
            ingredients: (0..(3 + n % 6))
                .map(|k| RecipeIngredientRef {
                    id: IngredientId::new(format!("ing-{}", (n * 7 + k * 13) % INGREDIENT_POOL)),
                    amount: "1".to_owned(),
                })
                .collect(),
            steps: vec!["Cook".to_owned()],
            difficulty: Difficulty::Medium,
            time: 20,
            tips: None,
        })
        .collect()
}

fn bench_match_recipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_recipes");
    let selected: HashSet<IngredientId> = (0..8)
        .map(|n| IngredientId::new(format!("ing-{}", n * 5)))
        .collect();

    for size in [10_usize, 100, 1_000, 10_000] {
        let recipes = synthetic_recipes(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &recipes, |b, recipes| {
            b.iter(|| match_recipes(black_box(&selected), black_box(recipes)));
        });
    }

    group.finish();
}

fn bench_builtin_catalog(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let selected: HashSet<IngredientId> = ["egg", "tomato", "spring-onion"]
        .into_iter()
        .map(IngredientId::from)
        .collect();

    c.bench_function("match_builtin_catalog", |b| {
        b.iter(|| match_recipes(black_box(&selected), black_box(catalog.recipes())));
    });
}

fn bench_parse_completion(c: &mut Criterion) {
    let content = r#"```json
{"name": "Braised Tofu", "ingredients": [{"name": "Firm tofu", "amount": "300g"},
{"name": "Shiitake mushroom", "amount": "6"}, {"name": "Oyster sauce", "amount": "1 tbsp"}],
"steps": ["Soak", "Fry", "Braise", "Serve"], "difficulty": "medium", "time": "35 minutes",
"tips": ["Keep the soaking water"]}
```"#;
    let tofu = IngredientId::from("tofu");
    let mushroom = IngredientId::from("mushroom");
    let candidates = [
        ResolverCandidate {
            id: &tofu,
            name: "Tofu",
        },
        ResolverCandidate {
            id: &mushroom,
            name: "Shiitake Mushroom",
        },
    ];

    c.bench_function("parse_generated_recipe", |b| {
        b.iter(|| {
            parse_generated_recipe(
                black_box(content),
                &candidates,
                &ContainmentResolver,
                "AI creative dish: Tofu mixed",
            )
            .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_match_recipes,
    bench_builtin_catalog,
    bench_parse_completion,
);
criterion_main!(benches);
