// ABOUTME: Typed errors raised by the recipe model
// ABOUTME: Construction rejections and defensive snapshot-divergence failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! # Recipe Error Types
//!
//! All failures the core model can raise. Construction errors reject the
//! whole recipe (no partially built instance is handed out); the
//! snapshot-divergence error is a defensive check that cannot fire under
//! correct construction, but is reported rather than silently skipped.

use thiserror::Error;

/// Errors raised by [`crate::models::Recipe`] construction and recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeError {
    /// An ingredient without an identifier cannot join the keyed collection.
    ///
    /// Detached snapshot copies carry an empty `cid` on purpose; feeding one
    /// back into construction is a caller bug and is named explicitly.
    #[error("ingredient '{name}' has no identifier and cannot join a recipe")]
    UnkeyedIngredient {
        /// Display name of the offending ingredient
        name: String,
    },

    /// Two input ingredients carried the same identifier.
    ///
    /// The identifier is the join key between the working set and the source
    /// snapshot, so a duplicate would silently drop one row's ground truth.
    #[error("duplicate ingredient identifier '{cid}'")]
    DuplicateId {
        /// The repeated identifier
        cid: String,
    },

    /// A working entry has no matching source-snapshot entry.
    ///
    /// The two collections are built together and never change shape, so this
    /// is unreachable unless the instance memory was corrupted; the affected
    /// recipe must be discarded.
    #[error("ingredient '{cid}' is missing from the source snapshot")]
    SourceMissing {
        /// Identifier of the orphaned working entry
        cid: String,
    },
}

impl RecipeError {
    /// True for errors that reject construction (no recipe was produced).
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(self, Self::UnkeyedIngredient { .. } | Self::DuplicateId { .. })
    }
}
