// ABOUTME: Integration tests for text and JSON recipe export
// ABOUTME: Verifies file contents byte-for-byte and filename suggestion
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! Tests for the export layer including:
//! - Text export content (header plus ingredient lines)
//! - JSON export content and key order
//! - Export reports
//! - Filename suggestion from titles

use std::fs;

use portioner::export::{export_json, export_text, suggested_filename};
use portioner_core::models::{Ingredient, Recipe};
use tempfile::TempDir;

fn flour_sugar() -> Recipe {
    Recipe::new(vec![
        Ingredient::new("Flour", 200.0, "g", "cid_0"),
        Ingredient::new("Sugar", 50.0, "g", "cid_1"),
    ])
    .unwrap()
}

// ============================================================================
// Text Export
// ============================================================================

#[test]
fn test_text_export_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipe.txt");

    let recipe = flour_sugar();
    let report = export_text(&recipe, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "РЕЦЕПТ:\n \nFlour: 200 g \nSugar: 50 g \n");

    assert_eq!(report.path, path);
    assert_eq!(report.bytes_written, content.len());
    assert_eq!(report.lines, 2);
}

#[test]
fn test_text_export_reflects_scaled_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scaled.txt");

    let mut recipe = flour_sugar();
    recipe.recount(2.0).unwrap();
    export_text(&recipe, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "РЕЦЕПТ:\n \nFlour: 400 g \nSugar: 100 g \n");
}

#[test]
fn test_text_export_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/recipe.txt");

    export_text(&flour_sugar(), &path).unwrap();
    assert!(path.exists());
}

// ============================================================================
// JSON Export
// ============================================================================

#[test]
fn test_json_export_content_and_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipe.json");

    let report = export_json(&flour_sugar(), &path).unwrap();
    assert_eq!(report.lines, 2);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.find("cid_0").unwrap() < content.find("cid_1").unwrap());

    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["cid_0"]["name"], "Flour");
    assert_eq!(parsed["cid_0"]["value"], 200.0);
    assert_eq!(parsed["cid_0"]["measure"], "g");
    assert_eq!(parsed["cid_0"]["cid"], "cid_0");
    assert_eq!(parsed["cid_1"]["name"], "Sugar");
}

// ============================================================================
// Filename Suggestion
// ============================================================================

#[test]
fn test_suggested_filename_from_titles() {
    assert_eq!(suggested_filename("Apple Pie", "txt"), "apple-pie.txt");
    assert_eq!(suggested_filename("Бабушкин Борщ", "txt"), "бабушкин-борщ.txt");
    assert_eq!(suggested_filename("Waffles (v2)", "json"), "waffles-v2.json");
    assert_eq!(suggested_filename("", "txt"), "recipe.txt");
}
