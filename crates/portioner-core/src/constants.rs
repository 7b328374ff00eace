// ABOUTME: Domain constants for the portioner recipe-scaling calculator
// ABOUTME: Display header text and intake-form defaults grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! Constants module
//!
//! Pure data constants grouped by domain. The intake values mirror the
//! behavior of the original input form: amounts below the minimum are
//! rejected, nameless rows get a placeholder label, and row identifiers
//! are derived from the row index.

/// Display and export constants
pub mod display {
    /// Header chunk emitted before the ingredient lines of a text export.
    ///
    /// The trailing `"\n \n"` keeps a visible blank line between the header
    /// and the first ingredient in plain-text viewers.
    pub const RECIPE_HEADER: &str = "РЕЦЕПТ:\n \n";
}

/// Intake-form constants
pub mod intake {
    /// Smallest amount an intake row may carry
    pub const MIN_AMOUNT: f64 = 0.001;

    /// Label substituted for a row submitted without a name
    pub const DEFAULT_NAME: &str = "Нет названия";

    /// Prefix for row identifiers (`cid_0`, `cid_1`, ...)
    pub const CID_PREFIX: &str = "cid_";

    /// Amount syntax accepted by intake validation: a non-negative decimal
    /// numeral with an optional fractional part, dot or comma separated
    pub const AMOUNT_PATTERN: &str = r"^\d+([,.]\d+)?$";
}
