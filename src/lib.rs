// ABOUTME: Main library entry point for the portioner recipe-scaling application
// ABOUTME: Intake, scaling sessions, export, configuration, and logging over portioner-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

#![deny(unsafe_code)]

//! # Portioner
//!
//! A recipe-scaling calculator. Ingredients are entered once as free-text
//! rows, snapshotted into a recipe, and from then on changing any single
//! amount rescales every other amount proportionally, with a reset back to
//! the original values and text/JSON export of the current state.
//!
//! The ratio-based recalculation model itself lives in the `portioner-core`
//! crate; this crate layers the surrounding application on top:
//!
//! - **intake**: free-text row validation, defaults, and recipe construction
//! - **session**: change/reset event handling over one recipe
//! - **export**: text and JSON files of the current working state
//! - **config**: environment-variable configuration
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use portioner::intake::{IntakeForm, RawRow};
//! use portioner::session::ScalingSession;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut form = IntakeForm::new();
//!     form.add_row(RawRow::new("Мука", "200", "г"));
//!     form.add_row(RawRow::new("Сахар", "50", "г"));
//!
//!     let mut session = ScalingSession::new(form.build()?);
//!
//!     // Doubling the flour doubles everything else
//!     session.apply_change("cid_0", 400.0)?;
//!     assert_eq!(session.recipe().get("cid_1").map(|i| i.value), Some(100.0));
//!
//!     session.reset()?;
//!     assert!(session.is_pristine());
//!     Ok(())
//! }
//! ```

/// Environment-variable application configuration
pub mod config;

/// Text and JSON export of the working recipe state
pub mod export;

/// Intake rows, validation, and recipe construction
pub mod intake;

/// Structured logging configuration
pub mod logging;

/// Scaling session: change and reset event handling over one recipe
pub mod session;
