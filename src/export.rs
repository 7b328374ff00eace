// ABOUTME: Export of the current working recipe state to text and JSON files
// ABOUTME: Filename suggestion from recipe titles and a write report per export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! Recipe export
//!
//! Packages the recipe's display chunks (text) or serializable mapping
//! (JSON) into a file on disk. Only the working state is exported; the
//! source snapshot never leaves the recipe.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use portioner_core::models::Recipe;

/// File stem used when a title sanitizes down to nothing.
const FALLBACK_STEM: &str = "recipe";

/// Errors raised while writing export files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The file or its parent directory could not be written.
    #[error("failed to write export file {}", path.display())]
    Io {
        /// Path of the attempted write
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The working state could not be serialized to JSON.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Outcome of a successful export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Path the file was written to
    pub path: PathBuf,
    /// Size of the written file in bytes
    pub bytes_written: usize,
    /// Ingredient entries written (the text header chunk is not counted)
    pub lines: usize,
    /// When the export happened
    pub exported_at: DateTime<Utc>,
}

/// Write the recipe's display chunks to a plain-text file.
///
/// The content is the header chunk followed by one line per ingredient in
/// working order, byte-for-byte what [`Recipe::display_lines`] yields.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file or its parent directory cannot
/// be written.
pub fn export_text(recipe: &Recipe, path: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
    let path = path.as_ref();
    let content: String = recipe.display_lines().collect();

    write_file(path, content.as_bytes())?;
    info!(path = %path.display(), bytes = content.len(), "text export written");

    Ok(ExportReport {
        path: path.to_path_buf(),
        bytes_written: content.len(),
        lines: recipe.len(),
        exported_at: Utc::now(),
    })
}

/// Write the recipe's working state to a pretty-printed JSON file.
///
/// The document is the `{cid: {name, value, measure, cid}}` mapping with key
/// order following working order.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] if the mapping cannot be encoded,
/// or [`ExportError::Io`] if the file cannot be written.
pub fn export_json(recipe: &Recipe, path: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(&recipe.to_serializable())?;

    write_file(path, content.as_bytes())?;
    info!(path = %path.display(), bytes = content.len(), "json export written");

    Ok(ExportReport {
        path: path.to_path_buf(),
        bytes_written: content.len(),
        lines: recipe.len(),
        exported_at: Utc::now(),
    })
}

/// Generate a safe filename from a recipe title.
///
/// Lowercases, turns spaces into hyphens, and strips everything that is not
/// alphanumeric or a hyphen. A title with nothing left after sanitizing
/// falls back to a generic stem.
#[must_use]
pub fn suggested_filename(title: &str, extension: &str) -> String {
    let safe_name: String = title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect();

    if safe_name.is_empty() {
        format!("{FALLBACK_STEM}.{extension}")
    } else {
        format!("{safe_name}.{extension}")
    }
}

/// Write bytes to `path`, creating missing parent directories.
fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_filename_sanitizes() {
        assert_eq!(suggested_filename("Борщ classic", "txt"), "борщ-classic.txt");
        assert_eq!(suggested_filename("Apple Pie!", "json"), "apple-pie.json");
        assert_eq!(suggested_filename("***", "txt"), "recipe.txt");
    }
}
