// ABOUTME: Recipe aggregate owning a working ingredient set plus an immutable source snapshot
// ABOUTME: Ratio-based recompute, reset-to-source, and ordered serialization/display output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

use indexmap::IndexMap;
use tracing::trace;

use crate::constants::display;
use crate::errors::RecipeError;
use crate::format::display_amount;
use crate::models::Ingredient;

/// Owning aggregate of ingredients with both a live and an original value per
/// ingredient.
///
/// Two insertion-ordered collections share one key set: the *working* set
/// holds the values currently shown to the user and is rewritten in place by
/// [`recount`](Self::recount) and [`reset`](Self::reset); the *source* set is
/// captured once at construction and never written again, serving as the
/// ground truth for all ratio math. A recipe is *pristine* while every
/// working value still equals its source value and *scaled* otherwise.
///
/// Both collections are exclusively owned. Reads hand out shared borrows
/// tied to the recipe, so no caller can hold onto an ingredient across a
/// recount and observe it change underneath.
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Live values in original input order, mutated in place by rescaling
    working: IndexMap<String, Ingredient>,
    /// Original values captured at construction, never mutated afterwards
    source: IndexMap<String, Ingredient>,
}

impl Recipe {
    /// Build a recipe from ingredients in input order.
    ///
    /// Each ingredient is stored into the working set under its `cid`, and a
    /// [detached clone](Ingredient::detached_clone) of it into the source
    /// snapshot under the same key. Input order becomes iteration order for
    /// display and export.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::UnkeyedIngredient`] if an ingredient has an
    /// empty `cid` and therefore cannot join the keyed collections, or
    /// [`RecipeError::DuplicateId`] if two ingredients share a `cid`.
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Self, RecipeError> {
        let mut working = IndexMap::with_capacity(ingredients.len());
        let mut source = IndexMap::with_capacity(ingredients.len());

        for item in ingredients {
            if !item.is_keyed() {
                return Err(RecipeError::UnkeyedIngredient { name: item.name });
            }
            if working.contains_key(&item.cid) {
                return Err(RecipeError::DuplicateId { cid: item.cid });
            }
            source.insert(item.cid.clone(), item.detached_clone());
            working.insert(item.cid.clone(), item);
        }

        Ok(Self { working, source })
    }

    /// Read-only view of the source snapshot, keyed by `cid`.
    ///
    /// Callers use this to look up ratio denominators; the snapshot itself
    /// cannot be altered through the returned reference.
    #[must_use]
    pub const fn source(&self) -> &IndexMap<String, Ingredient> {
        &self.source
    }

    /// Original construction-time value for `cid`, if present.
    #[must_use]
    pub fn source_value(&self, cid: &str) -> Option<f64> {
        self.source.get(cid).map(|item| item.value)
    }

    /// Rescale every working value to `source value * ratio`.
    ///
    /// Any finite ratio is applied without clamping: zero and negative
    /// ratios propagate mathematically, which keeps this operation a pure
    /// multiplication with no business rules attached. Repeated calls always
    /// start from the source values, so scaling never compounds.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::SourceMissing`] if a working key has no source
    /// counterpart. The constructor makes that impossible, so hitting it
    /// means the instance is corrupt and must be discarded.
    pub fn recount(&mut self, ratio: f64) -> Result<(), RecipeError> {
        for (cid, item) in &mut self.working {
            let original = self
                .source
                .get(cid)
                .ok_or_else(|| RecipeError::SourceMissing { cid: cid.clone() })?;
            item.value = original.value * ratio;
        }
        trace!(ratio, ingredients = self.working.len(), "recipe recounted");
        Ok(())
    }

    /// Copy every source value back into the working set.
    ///
    /// Equivalent to `recount(1.0)` but implemented as a direct copy, so a
    /// reset recipe is bit-for-bit identical to a freshly constructed one
    /// regardless of how many rescales happened in between.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::SourceMissing`] under the same key-divergence
    /// condition as [`recount`](Self::recount).
    pub fn reset(&mut self) -> Result<(), RecipeError> {
        for (cid, item) in &mut self.working {
            let original = self
                .source
                .get(cid)
                .ok_or_else(|| RecipeError::SourceMissing { cid: cid.clone() })?;
            item.value = original.value;
        }
        trace!(ingredients = self.working.len(), "recipe reset to source values");
        Ok(())
    }

    /// Owned copy of the working set, suitable for structured export.
    ///
    /// Key order follows working-set iteration order, so a JSON encoder that
    /// respects map order (as `serde_json` does for [`IndexMap`]) reproduces
    /// the original input order.
    #[must_use]
    pub fn to_serializable(&self) -> IndexMap<String, Ingredient> {
        self.working.clone()
    }

    /// JSON document of the working set, `{cid: {name, value, measure, cid}}`.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.working)
    }

    /// Lazy sequence of display chunks: one header followed by one line per
    /// ingredient in working order.
    ///
    /// The iterator borrows the recipe and is finite; calling this method
    /// again restarts the sequence from the header. Amounts are formatted
    /// through [`display_amount`](crate::format::display_amount) at yield
    /// time; stored values are not touched.
    pub fn display_lines(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(display::RECIPE_HEADER.to_owned()).chain(self.working.values().map(
            |item| {
                format!(
                    "{}: {} {} \n",
                    item.name,
                    display_amount(item.value),
                    item.measure
                )
            },
        ))
    }

    /// Number of ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Whether the recipe has no ingredients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Whether an ingredient with this `cid` exists.
    #[must_use]
    pub fn contains(&self, cid: &str) -> bool {
        self.working.contains_key(cid)
    }

    /// Current working state of the ingredient with this `cid`.
    #[must_use]
    pub fn get(&self, cid: &str) -> Option<&Ingredient> {
        self.working.get(cid)
    }

    /// Ingredients in working order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.working.values()
    }

    /// Whether every working value still equals its source value.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.working.iter().all(|(cid, item)| {
            self.source
                .get(cid)
                .is_some_and(|original| (original.value - item.value).abs() < f64::EPSILON)
        })
    }
}

impl<'a> IntoIterator for &'a Recipe {
    type Item = &'a Ingredient;
    type IntoIter = indexmap::map::Values<'a, String, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.working.values()
    }
}
