// ABOUTME: Integration tests for the scaling session event handling
// ABOUTME: Covers ratio derivation, unknown identifiers, reset, and field views
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! Tests for the scaling session including:
//! - Change events and the ratio they derive
//! - Unknown-identifier and non-finite-ratio rejections
//! - Reset behavior
//! - Display-ready field views and passthroughs
//! - Wholesale recipe replacement

use portioner::session::{ScalingSession, SessionError};
use portioner_core::models::{Ingredient, Recipe};

fn session() -> ScalingSession {
    let recipe = Recipe::new(vec![
        Ingredient::new("Flour", 200.0, "(g)", "cid_0"),
        Ingredient::new("Sugar", 50.0, "(g)", "cid_1"),
    ])
    .unwrap();
    ScalingSession::new(recipe)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Change Events
// ============================================================================

#[test]
fn test_change_rescales_every_ingredient() {
    let mut session = session();

    let ratio = session.apply_change("cid_0", 400.0).unwrap();
    assert_close(ratio, 2.0);

    assert_close(session.recipe().get("cid_0").unwrap().value, 400.0);
    assert_close(session.recipe().get("cid_1").unwrap().value, 100.0);
}

#[test]
fn test_changing_the_other_ingredient_derives_its_own_ratio() {
    let mut session = session();

    let ratio = session.apply_change("cid_1", 25.0).unwrap();
    assert_close(ratio, 0.5);
    assert_close(session.recipe().get("cid_0").unwrap().value, 100.0);
}

#[test]
fn test_ratio_is_always_against_source_values() {
    let mut session = session();

    session.apply_change("cid_0", 400.0).unwrap();
    let ratio = session.apply_change("cid_0", 100.0).unwrap();

    // 100 over the source 200, not over the scaled 400
    assert_close(ratio, 0.5);
    assert_close(session.recipe().get("cid_1").unwrap().value, 25.0);
}

#[test]
fn test_change_to_zero_is_permitted() {
    let mut session = session();

    let ratio = session.apply_change("cid_0", 0.0).unwrap();
    assert_close(ratio, 0.0);
    assert_close(session.recipe().get("cid_1").unwrap().value, 0.0);
}

#[test]
fn test_unknown_identifier_is_rejected() {
    let mut session = session();
    let err = session.apply_change("cid_7", 100.0).unwrap_err();

    assert_eq!(
        err,
        SessionError::UnknownIngredient {
            cid: "cid_7".to_owned()
        }
    );
}

#[test]
fn test_zero_source_value_cannot_derive_a_ratio() {
    let recipe = Recipe::new(vec![Ingredient::new("Pinch", 0.0, "", "cid_0")]).unwrap();
    let mut session = ScalingSession::new(recipe);

    let err = session.apply_change("cid_0", 10.0).unwrap_err();
    assert!(matches!(err, SessionError::NonFiniteRatio { .. }));

    // The failed change must not have touched the working values
    assert_close(session.recipe().get("cid_0").unwrap().value, 0.0);
}

// ============================================================================
// Reset and Replacement
// ============================================================================

#[test]
fn test_reset_restores_source_values() {
    let mut session = session();

    session.apply_change("cid_0", 400.0).unwrap();
    assert!(!session.is_pristine());

    session.reset().unwrap();
    assert!(session.is_pristine());
    assert_close(session.recipe().get("cid_0").unwrap().value, 200.0);
    assert_close(session.recipe().get("cid_1").unwrap().value, 50.0);
}

#[test]
fn test_replace_recipe_keeps_the_session_id() {
    let mut session = session();
    let id = session.id();

    session.apply_change("cid_0", 400.0).unwrap();

    let rebuilt = Recipe::new(vec![Ingredient::new("Salt", 5.0, "(g)", "cid_0")]).unwrap();
    session.replace_recipe(rebuilt);

    assert_eq!(session.id(), id);
    assert_eq!(session.recipe().len(), 1);
    assert_eq!(session.recipe().get("cid_0").unwrap().name, "Salt");
    assert!(session.is_pristine());
}

// ============================================================================
// Field Views and Passthroughs
// ============================================================================

#[test]
fn test_fields_echo_formatted_amounts() {
    let mut session = session();
    session.apply_change("cid_0", 66.66666666).unwrap();

    let fields = session.fields();
    assert_eq!(fields.len(), 2);

    assert_eq!(fields[0].cid, "cid_0");
    assert_eq!(fields[0].label, "(g) Flour");
    assert_eq!(fields[0].amount, "66.667");

    assert_eq!(fields[1].cid, "cid_1");
    assert_eq!(fields[1].label, "(g) Sugar");
    assert_eq!(fields[1].amount, "16.667");
}

#[test]
fn test_display_lines_passthrough() {
    let session = session();
    let lines: Vec<String> = session.display_lines().collect();

    assert_eq!(
        lines,
        vec![
            "РЕЦЕПТ:\n \n".to_owned(),
            "Flour: 200 (g) \n".to_owned(),
            "Sugar: 50 (g) \n".to_owned(),
        ]
    );
}

#[test]
fn test_serializable_passthrough_follows_working_order() {
    let mut session = session();
    session.apply_change("cid_1", 100.0).unwrap();

    let mapping = session.to_serializable();
    let keys: Vec<&String> = mapping.keys().collect();
    assert_eq!(keys, ["cid_0", "cid_1"]);
    assert_close(mapping["cid_0"].value, 400.0);
}
