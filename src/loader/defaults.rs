//! Built-in default configuration values.
//!
//! Responsibilities:
//! - Provide the lowest-precedence candidate mapping: the environment mode
//!   plus deferred derivations of the application name and base directory.
//!
//! Does NOT handle:
//! - The workspace key, which is applied after merge and resolution
//!   (see `sources.rs`).
//!
//! Invariants:
//! - The deferred derivations never error; each falls through a fallback
//!   chain ending in a hardcoded placeholder or the current directory.
//! - Name derivation order: manifest package name, then the current
//!   directory's basename, then [`FALLBACK_APP_NAME`].

use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_ENV, FALLBACK_APP_NAME, KEY_DIR, KEY_ENV, KEY_NAME, MANIFEST_FILE_NAME,
};
use crate::value::{Candidate, Candidates};

/// The built-in default table.
pub(crate) fn defaults() -> Candidates {
    let mut table = Candidates::new();
    table.insert(KEY_ENV.to_string(), Candidate::from(DEFAULT_ENV));
    table.insert(KEY_NAME.to_string(), Candidate::deferred(derive_app_name));
    table.insert(KEY_DIR.to_string(), Candidate::deferred(derive_app_dir));
    table
}

/// The manifest in the current working directory, if one exists.
async fn cwd_manifest() -> Option<PathBuf> {
    let manifest = std::env::current_dir().ok()?.join(MANIFEST_FILE_NAME);
    match tokio::fs::try_exists(&manifest).await {
        Ok(true) => Some(manifest),
        _ => None,
    }
}

async fn manifest_package_name(path: &Path) -> Option<String> {
    let text = tokio::fs::read_to_string(path).await.ok()?;
    let table: toml::Table = text.parse().ok()?;
    table
        .get("package")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

async fn derive_app_name() -> anyhow::Result<String> {
    if let Some(manifest) = cwd_manifest().await
        && let Some(name) = manifest_package_name(&manifest).await
    {
        return Ok(name);
    }
    if let Ok(cwd) = std::env::current_dir()
        && let Some(name) = cwd.file_name().and_then(|n| n.to_str())
    {
        return Ok(name.to_string());
    }
    Ok(FALLBACK_APP_NAME.to_string())
}

async fn derive_app_dir() -> anyhow::Result<String> {
    if let Some(manifest) = cwd_manifest().await
        && let Some(dir) = manifest.parent().and_then(|p| p.to_str())
    {
        return Ok(dir.to_string());
    }
    let dir = std::env::current_dir()
        .ok()
        .and_then(|p| p.to_str().map(str::to_string))
        .unwrap_or_else(|| ".".to_string());
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::global_test_lock;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    use crate::loader::tests::CwdGuard;

    #[test]
    fn default_table_has_the_fixed_and_deferred_keys() {
        let table = defaults();
        assert!(matches!(
            table.get(KEY_ENV),
            Some(Candidate::Literal(v)) if v == DEFAULT_ENV
        ));
        assert!(matches!(table.get(KEY_NAME), Some(Candidate::Deferred(_))));
        assert!(matches!(table.get(KEY_DIR), Some(Candidate::Deferred(_))));
    }

    #[tokio::test]
    #[serial]
    async fn app_name_comes_from_the_manifest_when_present() {
        let _lock = global_test_lock().lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(MANIFEST_FILE_NAME),
            "[package]\nname = \"derived-app\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();
        let _cwd = CwdGuard::new(&temp_dir);

        assert_eq!(derive_app_name().await.unwrap(), "derived-app");
    }

    #[tokio::test]
    #[serial]
    async fn app_name_falls_back_to_the_directory_basename() {
        let _lock = global_test_lock().lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let _cwd = CwdGuard::new(&temp_dir);

        let expected = temp_dir
            .path()
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(derive_app_name().await.unwrap(), expected);
    }

    #[tokio::test]
    #[serial]
    async fn app_name_survives_a_malformed_manifest() {
        let _lock = global_test_lock().lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(MANIFEST_FILE_NAME), "not [valid toml").unwrap();
        let _cwd = CwdGuard::new(&temp_dir);

        // Falls through to the directory basename rather than erroring.
        let expected = temp_dir
            .path()
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(derive_app_name().await.unwrap(), expected);
    }

    #[tokio::test]
    #[serial]
    async fn app_dir_is_the_manifest_directory_or_cwd() {
        let _lock = global_test_lock().lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(MANIFEST_FILE_NAME),
            "[package]\nname = \"derived-app\"\n",
        )
        .unwrap();
        let _cwd = CwdGuard::new(&temp_dir);

        let derived = derive_app_dir().await.unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(PathBuf::from(derived), cwd);
    }
}
