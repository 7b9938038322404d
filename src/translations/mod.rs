//! Localized country names keyed by (country code, language code).
//!
//! Each record of the source document describes one country: `alpha3` is the
//! key, `id` and `alpha2` are identifiers, and every other field maps a
//! language code to the country's name in that language. Both keys are
//! lowercased on insert and on lookup.

use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::data::{self, Record, Source};
use crate::error::{Error, Result};

const BUNDLED_TRANSLATIONS: &str = include_str!("translations.json");

const COUNTRY_FIELD: &str = "alpha3";
const IDENTIFIER_FIELDS: [&str; 3] = ["id", "alpha2", COUNTRY_FIELD];

#[derive(Debug, Clone)]
struct CountryTranslations {
    code: String,
    languages: Vec<String>,
    names: HashMap<String, String>,
}

impl CountryTranslations {
    fn from_record(record: &Record, position: usize, resource: &str) -> Result<Self> {
        let code = match record.get(COUNTRY_FIELD) {
            Some(Value::String(code)) => normalize_code(code),
            _ => {
                return Err(Error::parse(
                    resource,
                    format!("record {} has no string '{}' field", position, COUNTRY_FIELD),
                ));
            }
        };

        let mut languages = Vec::new();
        let mut names = HashMap::new();
        for (key, value) in record {
            if IDENTIFIER_FIELDS.contains(&key.as_str()) {
                continue;
            }
            let Value::String(text) = value else {
                return Err(Error::parse(
                    resource,
                    format!("'{}' of country '{}' is not a string", key, code),
                ));
            };
            let language = normalize_code(key);
            if names.insert(language.clone(), text.clone()).is_none() {
                languages.push(language);
            }
        }

        Ok(CountryTranslations {
            code,
            languages,
            names,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    countries: Vec<CountryTranslations>,
    positions: HashMap<String, usize>,
}

impl TranslationStore {
    pub fn load(source: &Source) -> Result<Self> {
        let resource = source.describe();
        let records = data::read_records(source)?;
        let store = Self::from_records(&records, &resource)?;
        debug!(
            "translations: loaded {} countries from {}",
            store.len(),
            resource
        );
        Ok(store)
    }

    pub fn from_records(records: &[Record], resource: &str) -> Result<Self> {
        let mut store = TranslationStore::default();
        for (position, record) in records.iter().enumerate() {
            let country = CountryTranslations::from_record(record, position, resource)?;
            store.insert(country);
        }
        Ok(store)
    }

    fn insert(&mut self, country: CountryTranslations) {
        if let Some(&position) = self.positions.get(&country.code) {
            warn!(
                "translations: duplicate record for '{}'; later record replaces earlier",
                country.code
            );
            self.countries[position] = country;
            return;
        }
        self.positions
            .insert(country.code.clone(), self.countries.len());
        self.countries.push(country);
    }

    fn get(&self, country_code: &str) -> Option<&CountryTranslations> {
        self.positions
            .get(&normalize_code(country_code))
            .map(|&position| &self.countries[position])
    }

    /// Country codes with at least one translation, in record order.
    pub fn countries(&self) -> Vec<&str> {
        self.countries
            .iter()
            .filter(|country| !country.languages.is_empty())
            .map(|country| country.code.as_str())
            .collect()
    }

    /// Language codes recorded for a country; empty when the country is unknown.
    pub fn languages_for(&self, country_code: &str) -> &[String] {
        self.get(country_code)
            .map(|country| country.languages.as_slice())
            .unwrap_or(&[])
    }

    pub fn translate(&self, country_code: &str, language_code: &str) -> Option<&str> {
        self.get(country_code)?
            .names
            .get(&normalize_code(language_code))
            .map(String::as_str)
    }

    pub fn contains_country(&self, country_code: &str) -> bool {
        self.get(country_code).is_some()
    }

    /// Number of country records, including ones without translations.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

pub fn bundled_source() -> Source {
    Source::Bundled {
        name: "translations.json",
        content: BUNDLED_TRANSLATIONS,
    }
}

pub fn load_bundled() -> Result<TranslationStore> {
    TranslationStore::load(&bundled_source())
}

fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(json: &str) -> TranslationStore {
        let records = data::parse_records(json, "test").expect("parse records");
        TranslationStore::from_records(&records, "test").expect("build store")
    }

    const USA: &str = r#"[{"id": 1, "alpha2": "us", "alpha3": "usa", "fra": "États-Unis", "deu": "Vereinigte Staaten"}]"#;

    #[test]
    fn translates_case_insensitively() {
        let store = store(USA);
        assert_eq!(store.translate("usa", "fra"), Some("États-Unis"));
        assert_eq!(store.translate("USA", "FRA"), Some("États-Unis"));
        assert_eq!(store.translate("Usa", "deu"), Some("Vereinigte Staaten"));
    }

    #[test]
    fn missing_pairs_are_absent() {
        let store = store(USA);
        assert_eq!(store.translate("usa", "spa"), None);
        assert_eq!(store.translate("can", "fra"), None);
    }

    #[test]
    fn identifier_fields_are_not_languages() {
        let store = store(USA);
        assert_eq!(store.languages_for("USA"), ["fra", "deu"]);
        assert_eq!(store.translate("usa", "alpha2"), None);
        assert_eq!(store.translate("usa", "id"), None);
    }

    #[test]
    fn unknown_country_has_no_languages() {
        let store = store(USA);
        assert!(store.languages_for("zzz").is_empty());
    }

    #[test]
    fn countries_without_languages_are_not_listed() {
        let store = store(
            r#"[
                {"id": 3, "alpha2": "ad", "alpha3": "and"},
                {"id": 2, "alpha2": "fr", "alpha3": "FRA", "eng": "France"},
                {"id": 1, "alpha2": "us", "alpha3": "usa", "eng": "United States"}
            ]"#,
        );
        assert_eq!(store.len(), 3);
        assert!(store.contains_country("and"));
        assert_eq!(store.countries(), vec!["fra", "usa"]);
    }

    #[test]
    fn language_keys_are_lowercased() {
        let store = store(r#"[{"alpha3": "fra", "ENG": "France", "eng": "France (en)"}]"#);
        assert_eq!(store.languages_for("fra"), ["eng"]);
        assert_eq!(store.translate("fra", "eng"), Some("France (en)"));
    }

    #[test]
    fn duplicate_record_keeps_first_position() {
        let store = store(
            r#"[
                {"alpha3": "fra", "eng": "France"},
                {"alpha3": "deu", "eng": "Germany"},
                {"alpha3": "FRA", "deu": "Frankreich"}
            ]"#,
        );
        assert_eq!(store.countries(), vec!["fra", "deu"]);
        assert_eq!(store.translate("fra", "eng"), None);
        assert_eq!(store.translate("fra", "deu"), Some("Frankreich"));
    }

    #[test]
    fn record_without_alpha3_fails_to_load() {
        let records = data::parse_records(r#"[{"id": 1, "eng": "France"}]"#, "test").unwrap();
        let err = TranslationStore::from_records(&records, "test").unwrap_err();
        assert!(err.is_load());
    }

    #[test]
    fn non_string_translation_fails_to_load() {
        let records = data::parse_records(r#"[{"alpha3": "fra", "eng": 7}]"#, "test").unwrap();
        let err = TranslationStore::from_records(&records, "test").unwrap_err();
        assert!(err.is_load());
        assert!(err.to_string().contains("'eng' of country 'fra'"));
    }

    #[test]
    fn bundled_store_loads() {
        let store = load_bundled().expect("bundled translations");
        assert_eq!(store.translate("USA", "FRA"), Some("États-Unis"));
        assert!(!store.countries().contains(&"and"));
    }
}
