// ABOUTME: Domain models for the recipe-scaling core
// ABOUTME: Re-exports Ingredient and Recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! # Data Models
//!
//! The recalculation core is two types: [`Ingredient`], a value-like record
//! for one recipe component, and [`Recipe`], the aggregate that pairs a
//! mutable working collection with an immutable source snapshot and derives
//! every rescale from the snapshot.

mod ingredient;
mod recipe;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
