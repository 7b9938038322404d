use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod codes;
pub mod countries;
pub mod data;
pub mod error;
pub mod interactive;
pub mod languages;
pub mod logging;
mod paths;
pub mod settings;
#[cfg(test)]
mod test_util;
pub mod translations;
mod translator;

pub use error::Error;
pub use settings::Settings;
pub use translator::Translator;

use countries::CountryIndex;
use languages::LanguageIndex;
use translations::TranslationStore;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings_path: Option<String>,
    pub countries_path: Option<String>,
    pub languages_path: Option<String>,
    pub translations_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Countries,
    Languages { country: String },
    Translate { country: String, language: String },
    CountryCode { name: String },
    CountryName { code: String },
    LanguageCode { name: String },
    LanguageName { code: String },
    Check,
}

/// Reads settings, applies the command-line path overrides and builds the translator.
pub fn load(config: &Config) -> Result<(Settings, Translator)> {
    let settings_path = config.settings_path.as_deref().map(Path::new);
    let mut settings = settings::load_settings(settings_path)?;
    apply_overrides(&mut settings, config);
    let translator = load_translator(&settings)?;
    Ok((settings, translator))
}

fn apply_overrides(settings: &mut Settings, config: &Config) {
    if let Some(path) = config.countries_path.as_deref() {
        settings.countries_path = Some(PathBuf::from(path));
    }
    if let Some(path) = config.languages_path.as_deref() {
        settings.languages_path = Some(PathBuf::from(path));
    }
    if let Some(path) = config.translations_path.as_deref() {
        settings.translations_path = Some(PathBuf::from(path));
    }
}

pub fn load_translator(settings: &Settings) -> Result<Translator> {
    let countries = CountryIndex::load(&settings.countries_source())
        .with_context(|| "failed to load country codes")?;
    let languages = LanguageIndex::load(&settings.languages_source())
        .with_context(|| "failed to load language codes")?;
    let translations = TranslationStore::load(&settings.translations_source())
        .with_context(|| "failed to load translations")?;
    info!(
        "catalog: {} countries, {} languages, {} translation records",
        countries.len(),
        languages.len(),
        translations.len()
    );
    Ok(Translator::new(countries, languages, translations))
}

pub fn run(config: &Config, query: Query) -> Result<String> {
    let (settings, translator) = load(config)?;
    execute(&translator, &settings, query)
}

pub fn execute(translator: &Translator, settings: &Settings, query: Query) -> Result<String> {
    match query {
        Query::Countries => {
            let names = translator.available_country_names()?;
            Ok(format_names(names, settings.sort_names))
        }
        Query::Languages { country } => {
            let code = translator.resolve_country_code(&country)?;
            let names = translator.available_language_names(code)?;
            Ok(format_names(names, settings.sort_names))
        }
        Query::Translate { country, language } => translator
            .translate_names(&country, &language)?
            .map(str::to_string)
            .ok_or_else(|| anyhow!("no translation of '{}' in '{}'", country, language)),
        Query::CountryCode { name } => {
            let entry = translator
                .countries()
                .find_by_name(&name)
                .ok_or_else(|| Error::not_found("country name", name.as_str()))?;
            Ok(entry.codes.join("\t"))
        }
        Query::CountryName { code } => Ok(translator.resolve_country_name(&code)?.to_string()),
        Query::LanguageCode { name } => Ok(translator.resolve_language_code(&name)?.to_string()),
        Query::LanguageName { code } => Ok(translator.resolve_language_name(&code)?.to_string()),
        Query::Check => {
            translator.verify()?;
            Ok(format!(
                "ok: {} countries, {} languages, {} translated countries",
                translator.countries().len(),
                translator.languages().len(),
                translator.translations().countries().len()
            ))
        }
    }
}

pub(crate) fn format_names(mut names: Vec<&str>, sort: bool) -> String {
    if sort {
        names.sort_unstable();
    }
    names.join("\n")
}
