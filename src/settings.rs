use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::Source;
use crate::paths;
use crate::{countries, languages, translations};

const DEFAULT_SETTINGS_TOML: &str = include_str!("../settings.toml");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub countries_path: Option<PathBuf>,
    pub languages_path: Option<PathBuf>,
    pub translations_path: Option<PathBuf>,
    pub quit_word: String,
    pub sort_names: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            countries_path: None,
            languages_path: None,
            translations_path: None,
            quit_word: "quit".to_string(),
            sort_names: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    data: Option<DataSettings>,
    interactive: Option<InteractiveSettings>,
}

#[derive(Debug, Default, Deserialize)]
struct DataSettings {
    countries: Option<String>,
    languages: Option<String>,
    translations: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct InteractiveSettings {
    quit: Option<String>,
    sort: Option<bool>,
}

pub fn load_settings(extra_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();
    let defaults: SettingsFile = toml::from_str(DEFAULT_SETTINGS_TOML)
        .with_context(|| "failed to parse default settings")?;
    settings.merge(defaults, Path::new(""));

    let mut ordered_paths = Vec::new();
    ordered_paths.push(PathBuf::from("settings.toml"));
    ordered_paths.push(PathBuf::from("settings.local.toml"));

    if let Some(dir) = paths::settings_dir() {
        ordered_paths.push(dir.join("settings.toml"));
        ordered_paths.push(dir.join("settings.local.toml"));
    }

    if let Some(extra) = extra_path {
        if !extra.exists() {
            return Err(anyhow!("settings file not found: {}", extra.display()));
        }
        ordered_paths.push(extra.to_path_buf());
    }

    for path in ordered_paths {
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings: {}", path.display()))?;
            let parsed: SettingsFile = toml::from_str(&content)
                .with_context(|| format!("failed to parse settings: {}", path.display()))?;
            let base = path.parent().unwrap_or(Path::new(""));
            settings.merge(parsed, base);
        }
    }

    Ok(settings)
}

impl Settings {
    fn merge(&mut self, incoming: SettingsFile, base: &Path) {
        if let Some(data) = incoming.data {
            if let Some(path) = data.countries.as_deref().and_then(|value| data_path(value, base)) {
                self.countries_path = Some(path);
            }
            if let Some(path) = data.languages.as_deref().and_then(|value| data_path(value, base)) {
                self.languages_path = Some(path);
            }
            if let Some(path) = data
                .translations
                .as_deref()
                .and_then(|value| data_path(value, base))
            {
                self.translations_path = Some(path);
            }
        }
        if let Some(interactive) = incoming.interactive {
            if let Some(quit) = interactive.quit {
                if !quit.trim().is_empty() {
                    self.quit_word = quit.trim().to_string();
                }
            }
            if let Some(sort) = interactive.sort {
                self.sort_names = sort;
            }
        }
    }

    pub fn countries_source(&self) -> Source {
        self.countries_path
            .as_ref()
            .map(Source::file)
            .unwrap_or_else(countries::bundled_source)
    }

    pub fn languages_source(&self) -> Source {
        self.languages_path
            .as_ref()
            .map(Source::file)
            .unwrap_or_else(languages::bundled_source)
    }

    pub fn translations_source(&self) -> Source {
        self.translations_path
            .as_ref()
            .map(Source::file)
            .unwrap_or_else(translations::bundled_source)
    }
}

fn data_path(value: &str, base: &Path) -> Option<PathBuf> {
    let path = paths::resolve_data_path(value)?;
    if path.is_relative() && !base.as_os_str().is_empty() {
        Some(base.join(path))
    } else {
        Some(path)
    }
}
