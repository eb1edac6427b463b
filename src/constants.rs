//! Centralized constants for envmerge.
//!
//! This module contains the well-known configuration keys, their built-in
//! defaults, and the recognized command-line flags, to avoid magic string
//! duplication across the loader.

// =============================================================================
// Well-Known Configuration Keys
// =============================================================================

/// Environment-mode indicator (e.g. "development", "production").
pub const KEY_ENV: &str = "APP_ENV";

/// Derived application/package name.
pub const KEY_NAME: &str = "APP_NAME";

/// Derived application/package base directory.
pub const KEY_DIR: &str = "APP_DIR";

/// Workspace path; overridable via `--workspace`, defaults to the cwd.
pub const KEY_WORKSPACE: &str = "WORKSPACE";

// =============================================================================
// Built-In Defaults
// =============================================================================

/// Default value for [`KEY_ENV`] when no source provides one.
pub const DEFAULT_ENV: &str = "development";

/// Last-resort application name when no manifest or directory name is usable.
pub const FALLBACK_APP_NAME: &str = "unnamed-app";

/// File name of the project-local env file, joined onto the project root.
pub const ENV_FILE_NAME: &str = ".env";

/// Manifest file consulted when deriving the default application name.
pub const MANIFEST_FILE_NAME: &str = "Cargo.toml";

// =============================================================================
// Recognized Command-Line Flags
// =============================================================================

/// Flag naming an override env file to merge above the project `.env`.
pub const CONFIG_FLAG: &str = "--config";

/// Short alias for [`CONFIG_FLAG`].
pub const CONFIG_FLAG_ALIAS: &str = "-c";

/// Flag that unconditionally overwrites the resolved workspace key.
pub const WORKSPACE_FLAG: &str = "--workspace";

/// Short alias for [`WORKSPACE_FLAG`].
pub const WORKSPACE_FLAG_ALIAS: &str = "-w";

// =============================================================================
// Environment Gates
// =============================================================================

/// When set to "1" or "true", project `.env` loading is skipped entirely
/// (useful for tests and CI).
pub const DISABLE_DOTENV_VAR: &str = "ENVMERGE_DISABLE_DOTENV";
