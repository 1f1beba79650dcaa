//! Integration tests for environment file loading.
//!
//! Everything here mutates the process environment, so each test body runs
//! inside a `temp_env` closure; the crate serializes those through a global
//! lock and restores the managed variables afterwards.

use std::fs;
use std::path::PathBuf;

use carbonkit::{EnvFileConfig, EnvLoader, ELECTRICITY_MAPS_API_KEY};
use tempfile::TempDir;

fn write_env_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, contents).expect("env file should be writable");
    path
}

#[test]
fn load_from_path_returns_api_key() {
    let dir = TempDir::new().unwrap();
    let path = write_env_file(&dir, "ELECTRICITY_MAPS_API_KEY=abc123\n");

    temp_env::with_var_unset(ELECTRICITY_MAPS_API_KEY, || {
        EnvLoader::load_from_path(&path);
        assert_eq!(
            EnvLoader::var(ELECTRICITY_MAPS_API_KEY),
            Some("abc123".to_string())
        );
    });
}

#[test]
fn missing_file_and_variable_yield_none() {
    temp_env::with_var_unset(ELECTRICITY_MAPS_API_KEY, || {
        EnvLoader::load_from_path("/nonexistent/carbonkit/.env");
        assert_eq!(EnvLoader::var(ELECTRICITY_MAPS_API_KEY), None);
    });
}

#[test]
fn search_discovers_file_in_parent_directory() {
    let dir = TempDir::new().unwrap();
    write_env_file(&dir, "ELECTRICITY_MAPS_API_KEY=from-parent\n");
    let child = dir.path().join("child");
    fs::create_dir(&child).unwrap();

    temp_env::with_var_unset(ELECTRICITY_MAPS_API_KEY, || {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(&child).unwrap();

        let key = EnvLoader::electricity_maps_api_key();

        std::env::set_current_dir(original).unwrap();
        assert_eq!(key, Some("from-parent".to_string()));
    });
}

#[test]
fn repeated_loads_are_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_env_file(&dir, "ELECTRICITY_MAPS_API_KEY=abc123\n");

    temp_env::with_var_unset(ELECTRICITY_MAPS_API_KEY, || {
        EnvLoader::load_from_path(&path);
        let first = EnvLoader::var(ELECTRICITY_MAPS_API_KEY);

        // Rewriting the file between loads must not change the outcome:
        // variables already present in the process environment win.
        fs::write(&path, "ELECTRICITY_MAPS_API_KEY=changed\n").unwrap();
        EnvLoader::load_from_path(&path);
        let second = EnvLoader::var(ELECTRICITY_MAPS_API_KEY);

        assert_eq!(first, Some("abc123".to_string()));
        assert_eq!(first, second);
    });
}

#[test]
fn process_environment_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let path = write_env_file(&dir, "ELECTRICITY_MAPS_API_KEY=abc123\n");

    temp_env::with_var(ELECTRICITY_MAPS_API_KEY, Some("from-process"), || {
        EnvLoader::load_from_path(&path);
        assert_eq!(
            EnvLoader::var(ELECTRICITY_MAPS_API_KEY),
            Some("from-process".to_string())
        );
    });
}

#[test]
fn configured_path_takes_precedence_over_search() {
    let dir = TempDir::new().unwrap();
    let path = write_env_file(&dir, "ELECTRICITY_MAPS_API_KEY=from-config\n");

    let config = EnvFileConfig {
        path: Some(path),
        search: true,
    };

    temp_env::with_var_unset(ELECTRICITY_MAPS_API_KEY, || {
        assert_eq!(
            EnvLoader::electricity_maps_api_key_from(&config),
            Some("from-config".to_string())
        );
    });
}

#[test]
fn disabled_loading_leaves_environment_untouched() {
    let config = EnvFileConfig {
        path: None,
        search: false,
    };

    temp_env::with_var_unset(ELECTRICITY_MAPS_API_KEY, || {
        assert_eq!(EnvLoader::electricity_maps_api_key_from(&config), None);
    });
}
