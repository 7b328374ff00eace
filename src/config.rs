// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Export directory and default export file stem with platform fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! Environment-only configuration
//!
//! No config files. Every knob is an environment variable with a sensible
//! default, and malformed values fall back to the default with a warning
//! instead of aborting.

use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Environment variable naming the export directory.
pub const EXPORT_DIR_ENV: &str = "PORTIONER_EXPORT_DIR";

/// Environment variable naming the default export file stem.
pub const EXPORT_NAME_ENV: &str = "PORTIONER_EXPORT_NAME";

/// Default export file stem when none is configured.
const DEFAULT_EXPORT_NAME: &str = "recipe";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory export files are written into
    pub export_dir: PathBuf,
    /// File stem used when the caller does not supply an export name
    pub export_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            export_name: DEFAULT_EXPORT_NAME.to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `PORTIONER_EXPORT_DIR` names the export directory (default: the
    /// platform download directory, falling back to the current directory).
    /// `PORTIONER_EXPORT_NAME` names the default file stem (default:
    /// `recipe`). Empty values are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let export_dir = match env::var(EXPORT_DIR_ENV) {
            Ok(dir) if dir.trim().is_empty() => {
                warn!("{EXPORT_DIR_ENV} is set but empty, using the default export directory");
                default_export_dir()
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_export_dir(),
        };

        let export_name = match env::var(EXPORT_NAME_ENV) {
            Ok(name) if name.trim().is_empty() => {
                warn!("{EXPORT_NAME_ENV} is set but empty, using the default export name");
                DEFAULT_EXPORT_NAME.to_owned()
            }
            Ok(name) => name,
            Err(_) => DEFAULT_EXPORT_NAME.to_owned(),
        };

        Self {
            export_dir,
            export_name,
        }
    }

    /// Full path for an export file inside the configured directory.
    #[must_use]
    pub fn export_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.export_dir.join(file_name)
    }
}

/// Platform download directory, or the current directory when the platform
/// has none configured.
fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
