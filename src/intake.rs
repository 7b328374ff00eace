// ABOUTME: Intake form logic: raw user rows, amount validation, ingredient collection
// ABOUTME: Turns free-text rows into keyed Ingredients and builds the Recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! Ingredient intake
//!
//! The data half of an input form: an ordered list of free-text rows, a
//! validation pass over the amounts, and a collection pass that assigns row
//! identifiers and defaults. Validation and collection are deliberately
//! separate steps; collection never rejects, it substitutes defaults, so a
//! caller that skips validation still gets a well-formed ingredient list.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use portioner_core::constants::intake;
use portioner_core::errors::RecipeError;
use portioner_core::models::{Ingredient, Recipe};

/// Amount syntax check, compiled once. Stored as `Option` to handle
/// compilation failures gracefully (should never fail for a static pattern).
static AMOUNT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(intake::AMOUNT_PATTERN).ok());

/// One user-entered form row, all fields free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Ingredient name as typed (may be empty)
    pub name: String,
    /// Amount as typed; dot or comma decimal separator
    pub value: String,
    /// Unit text as typed (may be empty)
    pub measure: String,
}

impl RawRow {
    /// Create a row from its three text fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        measure: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            measure: measure.into(),
        }
    }
}

/// Boundary error kinds reported to whatever surface hosts the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormErrorCode {
    /// An amount field is not a positive decimal numeral
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
}

impl FormErrorCode {
    /// Wire name of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
        }
    }

    /// User-facing description of this code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided amount is not a valid positive number",
        }
    }
}

/// Errors raised while validating or building from intake rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// One or more rows carry an amount that fails the syntax or minimum
    /// check. Indexes are zero-based form-row positions.
    #[error("invalid amount in row(s) {rows:?}")]
    InvalidAmount {
        /// Offending row indexes, in form order
        rows: Vec<usize>,
    },

    /// The collected ingredients were rejected by recipe construction.
    #[error(transparent)]
    Recipe(#[from] RecipeError),
}

impl IntakeError {
    /// Boundary error code for this failure.
    #[must_use]
    pub const fn code(&self) -> FormErrorCode {
        match self {
            Self::InvalidAmount { .. } | Self::Recipe(_) => FormErrorCode::InvalidInput,
        }
    }
}

/// Ordered list of intake rows with validation and collection.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    rows: Vec<RawRow>,
}

impl IntakeForm {
    /// Create an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a form pre-filled with rows, in order.
    #[must_use]
    pub const fn with_rows(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    /// Append a row at the end of the form.
    pub fn add_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    /// Remove the row at `index`, shifting later rows up. Returns the removed
    /// row, or `None` when the index is out of range.
    pub fn remove_row(&mut self, index: usize) -> Option<RawRow> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Rows in form order.
    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the form has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check every row's amount: it must be a non-negative decimal numeral
    /// (dot or comma separator) of at least the minimum amount.
    ///
    /// All offending rows are reported at once so a form surface can mark
    /// them together.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidAmount`] listing every failing row
    /// index.
    pub fn validate(&self) -> Result<(), IntakeError> {
        let invalid: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !amount_is_valid(&row.value))
            .map(|(index, _)| index)
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(IntakeError::InvalidAmount { rows: invalid })
        }
    }

    /// Turn the rows into ingredients, in form order.
    ///
    /// Row *i* gets the identifier `cid_<i>`. An empty name becomes the
    /// placeholder label, an empty or unparseable amount becomes `0`, and a
    /// non-empty measure is wrapped in parentheses while an empty one stays
    /// empty. Collection never fails; run [`validate`](Self::validate) first
    /// when defaults are not acceptable.
    #[must_use]
    pub fn collect(&self) -> Vec<Ingredient> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let name = if row.name.is_empty() {
                    intake::DEFAULT_NAME.to_owned()
                } else {
                    row.name.clone()
                };
                let value = parse_amount(&row.value).unwrap_or(0.0);
                let measure = if row.measure.is_empty() {
                    String::new()
                } else {
                    format!("({})", row.measure)
                };
                Ingredient::new(name, value, measure, format!("{}{index}", intake::CID_PREFIX))
            })
            .collect()
    }

    /// Validate, collect, and construct a [`Recipe`] in one step.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidAmount`] when validation fails, or
    /// [`IntakeError::Recipe`] if recipe construction rejects the collected
    /// ingredients.
    pub fn build(&self) -> Result<Recipe, IntakeError> {
        self.validate()?;
        let ingredients = self.collect();
        debug!(rows = ingredients.len(), "intake rows collected");
        Ok(Recipe::new(ingredients)?)
    }
}

/// Whether an amount string passes the syntax and minimum checks.
fn amount_is_valid(value: &str) -> bool {
    let syntax_ok = AMOUNT_RE.as_ref().is_none_or(|re| re.is_match(value));
    if !syntax_ok {
        return false;
    }
    parse_amount(value).is_some_and(|amount| amount >= intake::MIN_AMOUNT)
}

/// Parse an amount string, accepting a comma as the decimal separator.
fn parse_amount(value: &str) -> Option<f64> {
    value.replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_amount_syntax() {
        assert!(amount_is_valid("200"));
        assert!(amount_is_valid("0.5"));
        assert!(amount_is_valid("0,5"));
        assert!(amount_is_valid("0.001"));

        assert!(!amount_is_valid(""));
        assert!(!amount_is_valid("abc"));
        assert!(!amount_is_valid("-5"));
        assert!(!amount_is_valid("1.2.3"));
        assert!(!amount_is_valid("0"));
        assert!(!amount_is_valid("0.0009"));
    }

    #[test]
    fn test_parse_amount_accepts_comma() {
        assert_eq!(parse_amount("1,5").unwrap(), 1.5);
        assert_eq!(parse_amount("1.5").unwrap(), 1.5);
        assert!(parse_amount("").is_none());
    }

    #[test]
    fn test_collect_defaults() {
        let form = IntakeForm::with_rows(vec![
            RawRow::new("", "", ""),
            RawRow::new("Соль", "2", "щепотка"),
        ]);
        let items = form.collect();

        assert_eq!(items[0].name, "Нет названия");
        assert_eq!(items[0].value, 0.0);
        assert_eq!(items[0].measure, "");
        assert_eq!(items[0].cid, "cid_0");

        assert_eq!(items[1].name, "Соль");
        assert_eq!(items[1].value, 2.0);
        assert_eq!(items[1].measure, "(щепотка)");
        assert_eq!(items[1].cid, "cid_1");
    }

    #[test]
    fn test_validate_reports_all_offenders() {
        let form = IntakeForm::with_rows(vec![
            RawRow::new("Flour", "200", "g"),
            RawRow::new("Bad", "", "g"),
            RawRow::new("Worse", "x2", "g"),
        ]);
        let err = form.validate().unwrap_err();
        assert_eq!(
            err,
            IntakeError::InvalidAmount {
                rows: vec![1, 2]
            }
        );
        assert_eq!(err.code().as_str(), "INVALID_INPUT");
    }
}
