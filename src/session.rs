// ABOUTME: Scaling session driving one recipe through change and reset events
// ABOUTME: Computes the ratio from a changed ingredient and exposes display-ready fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! Scaling session
//!
//! One session owns one [`Recipe`] and translates user events into core
//! operations: a changed amount becomes a ratio over that ingredient's
//! source value, the reset trigger copies source values back, and the field
//! views echo working amounts through the display formatter. Sessions are
//! driven sequentially by a single caller; there is no shared state and no
//! locking.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use portioner_core::errors::RecipeError;
use portioner_core::format::display_amount;
use portioner_core::models::{Ingredient, Recipe};

/// Errors raised while applying session events.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The changed identifier does not exist in this recipe.
    #[error("no ingredient with identifier '{cid}' in this recipe")]
    UnknownIngredient {
        /// The unrecognized identifier
        cid: String,
    },

    /// The change does not yield a finite ratio (the ingredient's source
    /// value is zero, so any target amount divides to infinity or NaN).
    /// Applying it would poison every working value at once.
    #[error("changing '{cid}' to {new_value} does not produce a finite ratio")]
    NonFiniteRatio {
        /// Identifier of the changed ingredient
        cid: String,
        /// The requested new amount
        new_value: f64,
    },

    /// The underlying recipe reported an invariant failure.
    #[error(transparent)]
    Recipe(#[from] RecipeError),
}

/// Display-ready row for one ingredient of a recalculation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Ingredient identifier, used to address changes back at the session
    pub cid: String,
    /// Field label, measure first: `"(g) Flour"`
    pub label: String,
    /// Current working amount, formatted for display
    pub amount: String,
}

/// Session wrapping one recipe with event handling and a correlation id.
#[derive(Debug, Clone)]
pub struct ScalingSession {
    id: Uuid,
    recipe: Recipe,
}

impl ScalingSession {
    /// Start a session over a freshly built recipe.
    #[must_use]
    pub fn new(recipe: Recipe) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, ingredients = recipe.len(), "scaling session started");
        Self { id, recipe }
    }

    /// Correlation id carried in this session's log records.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The recipe this session drives.
    #[must_use]
    pub const fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Apply a changed-amount event: `cid` was set to `new_value`.
    ///
    /// Computes `ratio = new_value / source value` and rescales the whole
    /// recipe by it. Returns the ratio that was applied.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownIngredient`] for an identifier outside
    /// this recipe, [`SessionError::NonFiniteRatio`] when the division does
    /// not produce a finite number, or a wrapped [`RecipeError`] if the
    /// recipe itself rejects the recount.
    pub fn apply_change(&mut self, cid: &str, new_value: f64) -> Result<f64, SessionError> {
        let source_value =
            self.recipe
                .source_value(cid)
                .ok_or_else(|| SessionError::UnknownIngredient {
                    cid: cid.to_owned(),
                })?;

        let ratio = new_value / source_value;
        if !ratio.is_finite() {
            return Err(SessionError::NonFiniteRatio {
                cid: cid.to_owned(),
                new_value,
            });
        }

        self.recipe.recount(ratio)?;
        info!(
            session = %self.id,
            cid,
            new_value,
            ratio,
            "ingredient change applied"
        );
        Ok(ratio)
    }

    /// Apply the reset trigger: every working value returns to its source
    /// value.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`RecipeError`] if the recipe reports an invariant
    /// failure.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.recipe.reset()?;
        info!(session = %self.id, "session reset to source values");
        Ok(())
    }

    /// Replace the recipe wholesale, keeping the session id.
    ///
    /// A resubmitted intake form produces a new recipe; the old one is
    /// dropped rather than structurally edited.
    pub fn replace_recipe(&mut self, recipe: Recipe) {
        debug!(
            session = %self.id,
            ingredients = recipe.len(),
            "session recipe replaced"
        );
        self.recipe = recipe;
    }

    /// Display-ready rows for every ingredient, in recipe order.
    ///
    /// Labels put the measure before the name, and amounts are echoed
    /// through the display formatter without touching stored values.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldView> {
        self.recipe
            .iter()
            .map(|item| FieldView {
                cid: item.cid.clone(),
                label: format!("{} {}", item.measure, item.name),
                amount: display_amount(item.value),
            })
            .collect()
    }

    /// Display chunks of the current working state, header first.
    pub fn display_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.recipe.display_lines()
    }

    /// Ordered serializable view of the current working state.
    #[must_use]
    pub fn to_serializable(&self) -> IndexMap<String, Ingredient> {
        self.recipe.to_serializable()
    }

    /// Whether every working value still equals its source value.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.recipe.is_pristine()
    }
}
