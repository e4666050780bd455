// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! All fields are optional in the file; absent or unparsable values fall back to
//! the crate defaults so an old or hand-edited settings file never breaks startup.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Galleria";

/// Number of items shown per gallery page.
pub const DEFAULT_PAGE_SIZE: usize = 30;
/// Accumulated wheel delta required to trigger one viewer navigation step.
/// One standard wheel notch reports a delta of 120.
pub const DEFAULT_WHEEL_THRESHOLD: f32 = 120.0;
/// Quiet period before a search keystroke burst becomes the active filter.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 200;

/// Which list next/previous navigation in the viewer walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationScope {
    /// Navigate across the entire filtered result list.
    #[default]
    FilteredList,
    /// Navigate only within the page that was visible when the viewer opened.
    CurrentPage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub wheel_threshold: Option<f32>,
    #[serde(default)]
    pub search_debounce_ms: Option<u64>,
    #[serde(default)]
    pub navigation_scope: Option<NavigationScope>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: Some(DEFAULT_PAGE_SIZE),
            wheel_threshold: Some(DEFAULT_WHEEL_THRESHOLD),
            search_debounce_ms: Some(DEFAULT_SEARCH_DEBOUNCE_MS),
            navigation_scope: Some(NavigationScope::FilteredList),
        }
    }
}

impl Config {
    /// Returns the effective page size, falling back to the default.
    ///
    /// A configured value of zero is treated as absent: a zero-item page
    /// would make every result list unreachable.
    #[must_use]
    pub fn effective_page_size(&self) -> usize {
        match self.page_size {
            Some(n) if n > 0 => n,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    /// Returns the effective wheel threshold, falling back to the default.
    #[must_use]
    pub fn effective_wheel_threshold(&self) -> f32 {
        match self.wheel_threshold {
            Some(t) if t > 0.0 => t,
            _ => DEFAULT_WHEEL_THRESHOLD,
        }
    }

    /// Returns the effective search debounce period, falling back to the default.
    #[must_use]
    pub fn effective_search_debounce_ms(&self) -> u64 {
        self.search_debounce_ms.unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS)
    }

    /// Returns the effective navigation scope, falling back to the default.
    #[must_use]
    pub fn effective_navigation_scope(&self) -> NavigationScope {
        self.navigation_scope.unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            page_size: Some(12),
            wheel_threshold: Some(60.0),
            search_debounce_ms: Some(150),
            navigation_scope: Some(NavigationScope::CurrentPage),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.page_size, config.page_size);
        assert_eq!(loaded.wheel_threshold, config.wheel_threshold);
        assert_eq!(loaded.search_debounce_ms, config.search_debounce_ms);
        assert_eq!(loaded.navigation_scope, config.navigation_scope);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.page_size, Some(DEFAULT_PAGE_SIZE));
        assert_eq!(loaded.effective_page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn effective_values_fall_back_on_absent_fields() {
        let config = Config {
            page_size: None,
            wheel_threshold: None,
            search_debounce_ms: None,
            navigation_scope: None,
        };

        assert_eq!(config.effective_page_size(), DEFAULT_PAGE_SIZE);
        assert!((config.effective_wheel_threshold() - DEFAULT_WHEEL_THRESHOLD).abs() < f32::EPSILON);
        assert_eq!(config.effective_search_debounce_ms(), DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(
            config.effective_navigation_scope(),
            NavigationScope::FilteredList
        );
    }

    #[test]
    fn zero_page_size_is_treated_as_absent() {
        let config = Config {
            page_size: Some(0),
            ..Config::default()
        };
        assert_eq!(config.effective_page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn navigation_scope_round_trips_kebab_case() {
        let toml_text = "navigation_scope = \"current-page\"\n";
        let loaded: Config = toml::from_str(toml_text).expect("parse failed");
        assert_eq!(
            loaded.navigation_scope,
            Some(NavigationScope::CurrentPage)
        );
    }
}
