use crate::countries::{CountryIndex, CountrySlot};
use crate::error::{Error, Result};
use crate::languages::{LanguageIndex, LanguageSlot};
use crate::translations::TranslationStore;

/// Read API over the country and language indexes and the translation store.
///
/// Holds already-built structures only; every query is a pure read.
#[derive(Debug, Clone)]
pub struct Translator {
    countries: CountryIndex,
    languages: LanguageIndex,
    translations: TranslationStore,
}

impl Translator {
    pub fn new(
        countries: CountryIndex,
        languages: LanguageIndex,
        translations: TranslationStore,
    ) -> Self {
        Self {
            countries,
            languages,
            translations,
        }
    }

    pub fn countries(&self) -> &CountryIndex {
        &self.countries
    }

    pub fn languages(&self) -> &LanguageIndex {
        &self.languages
    }

    pub fn translations(&self) -> &TranslationStore {
        &self.translations
    }

    /// Alpha-3 code for an exact (case-sensitive) country name.
    pub fn resolve_country_code(&self, name: &str) -> Result<&str> {
        self.countries.code_for_name(name, CountrySlot::Alpha3)
    }

    /// Country name for an alpha-3 code in any case.
    pub fn resolve_country_name(&self, code: &str) -> Result<&str> {
        self.countries.name_for_code(code, CountrySlot::Alpha3)
    }

    pub fn resolve_language_code(&self, name: &str) -> Result<&str> {
        self.languages.code_for_name(name, LanguageSlot::Code)
    }

    pub fn resolve_language_name(&self, code: &str) -> Result<&str> {
        self.languages.name_for_code(code, LanguageSlot::Code)
    }

    /// Names of countries that have at least one translation, in record order.
    ///
    /// A translated country missing from the country table is a data error and
    /// fails with `NotFound` instead of being dropped.
    pub fn available_country_names(&self) -> Result<Vec<&str>> {
        self.translations
            .countries()
            .into_iter()
            .map(|code| self.resolve_country_name(code))
            .collect()
    }

    pub fn available_language_names(&self, country_code: &str) -> Result<Vec<&str>> {
        self.translations
            .languages_for(country_code)
            .iter()
            .map(|code| self.resolve_language_name(code))
            .collect()
    }

    pub fn translate(&self, country_code: &str, language_code: &str) -> Option<&str> {
        self.translations.translate(country_code, language_code)
    }

    /// Resolves both display names and looks up the translation.
    ///
    /// Unknown names fail with `NotFound`; a known pair with no recorded text is `Ok(None)`.
    pub fn translate_names(&self, country_name: &str, language_name: &str) -> Result<Option<&str>> {
        let country = self.resolve_country_code(country_name)?;
        let language = self.resolve_language_code(language_name)?;
        Ok(self.translate(country, language))
    }

    /// Checks that every code used by the translation store resolves to a name.
    pub fn verify(&self) -> Result<()> {
        for code in self.translations.countries() {
            self.resolve_country_name(code)?;
            for language in self.translations.languages_for(code) {
                self.resolve_language_name(language).map_err(|err| match err {
                    Error::NotFound { kind, key } => Error::not_found(
                        kind,
                        format!("{} (used by country '{}')", key, code),
                    ),
                    other => other,
                })?;
            }
        }
        Ok(())
    }
}
