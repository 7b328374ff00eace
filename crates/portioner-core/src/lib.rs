// ABOUTME: Core recipe-scaling domain for the portioner calculator
// ABOUTME: Foundation crate with models, errors, amount formatting, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

#![deny(unsafe_code)]

//! # Portioner Core
//!
//! Foundation crate for the portioner recipe-scaling calculator. Holds the
//! ratio-based recalculation model and nothing else: no I/O, no runtime, no
//! form handling. The application crate layers intake, sessions, and export
//! on top.
//!
//! ## Modules
//!
//! - **models**: `Ingredient` and `Recipe`, the working-set/source-snapshot pair
//! - **errors**: `RecipeError` for construction rejections and invariant failures
//! - **format**: presentation-time amount rounding and rendering
//! - **constants**: display header and intake-form constants

/// Domain models: `Ingredient` and the `Recipe` aggregate
pub mod models;

/// Recipe construction and invariant errors
pub mod errors;

/// Presentation-time amount formatting
pub mod format;

/// Display and intake constants organized by domain
pub mod constants;
