// ABOUTME: Ingredient model, one named and quantified recipe component
// ABOUTME: Supports detached clones used to seed a recipe's source snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

use serde::{Deserialize, Serialize};

/// One named, quantified, unit-labeled component of a recipe.
///
/// Pure data holder. No validation happens at this layer; the intake form is
/// responsible for checking numeric format and minimum amounts before an
/// ingredient is constructed, so `value` is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display label for the ingredient
    pub name: String,
    /// Scalable quantity, in whatever unit `measure` names
    pub value: f64,
    /// Unit text (may be empty)
    pub measure: String,
    /// Identifier, unique within the owning recipe, assigned once and never
    /// reassigned
    pub cid: String,
}

impl Ingredient {
    /// Create a new ingredient with the given fields, stored as-is.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: f64,
        measure: impl Into<String>,
        cid: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            measure: measure.into(),
            cid: cid.into(),
        }
    }

    /// Copy of this ingredient with the identifier left unset.
    ///
    /// Detached copies seed a recipe's source snapshot, where entries are
    /// keyed by the map rather than by the ingredient itself and never rejoin
    /// an identifiable collection.
    #[must_use]
    pub fn detached_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value,
            measure: self.measure.clone(),
            cid: String::new(),
        }
    }

    /// Whether this ingredient carries an identifier usable as a map key.
    #[must_use]
    pub fn is_keyed(&self) -> bool {
        !self.cid.is_empty()
    }
}
