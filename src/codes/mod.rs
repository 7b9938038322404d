//! Bidirectional index between display names and fixed-arity code tuples.
//!
//! A [`CodeScheme`] describes one code family (how many code columns a row
//! carries, what each slot is called, how a slot compares, and how the source
//! table is delimited). [`CodeIndex`] is built once from parsed rows and is
//! read-only afterwards.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::data::{self, Delimiter, Row, Source};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRule {
    Sensitive,
    /// Compared after uppercasing both sides.
    Insensitive,
}

impl CaseRule {
    fn key(self, value: &str) -> String {
        match self {
            CaseRule::Sensitive => value.to_string(),
            CaseRule::Insensitive => value.to_uppercase(),
        }
    }
}

pub trait CodeScheme {
    type Slot: Copy + fmt::Debug;

    /// Human-readable family name used in lookup errors ("country", "language").
    const KIND: &'static str;
    /// One name per code column, in column order. The length is the arity.
    const SLOT_NAMES: &'static [&'static str];
    const DELIMITER: Delimiter;

    fn slot_index(slot: Self::Slot) -> usize;

    fn case_rule(_index: usize) -> CaseRule {
        CaseRule::Insensitive
    }

    fn arity() -> usize {
        Self::SLOT_NAMES.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub name: String,
    pub codes: Vec<String>,
}

impl CodeEntry {
    /// Last `arity` columns are codes, the rest is the name joined by single spaces.
    fn from_row(row: &[String], arity: usize) -> Option<Self> {
        if row.len() < arity + 1 {
            return None;
        }
        let split = row.len() - arity;
        Some(CodeEntry {
            name: row[..split].join(" "),
            codes: row[split..].to_vec(),
        })
    }

    pub fn code(&self, index: usize) -> Option<&str> {
        self.codes.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct CodeIndex<S: CodeScheme> {
    entries: Vec<CodeEntry>,
    by_name: HashMap<String, usize>,
    by_code: Vec<HashMap<String, usize>>,
    scheme: PhantomData<fn() -> S>,
}

impl<S: CodeScheme> CodeIndex<S> {
    pub fn load(source: &Source) -> Result<Self> {
        let rows = data::read_rows(source, S::DELIMITER)?;
        let index = Self::from_rows(rows);
        debug!(
            "{} codes: loaded {} entries from {}",
            S::KIND,
            index.len(),
            source.describe()
        );
        Ok(index)
    }

    /// Builds the index. Rows too short to hold a name plus every code are skipped.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        let arity = S::arity();
        let mut index = CodeIndex {
            entries: Vec::new(),
            by_name: HashMap::new(),
            by_code: vec![HashMap::new(); arity],
            scheme: PhantomData,
        };

        for (line, row) in rows.into_iter().enumerate() {
            let Some(entry) = CodeEntry::from_row(&row, arity) else {
                debug!(
                    "{} codes: skipping row {} ({} columns)",
                    S::KIND,
                    line + 1,
                    row.len()
                );
                continue;
            };
            index.insert(entry);
        }
        index
    }

    fn insert(&mut self, entry: CodeEntry) {
        let position = self.entries.len();
        self.by_name.entry(entry.name.clone()).or_insert(position);
        for (slot, code) in entry.codes.iter().enumerate() {
            let key = S::case_rule(slot).key(code);
            match self.by_code[slot].entry(key) {
                Entry::Vacant(vacant) => {
                    vacant.insert(position);
                }
                Entry::Occupied(occupied) => {
                    warn!(
                        "{} codes: duplicate {} '{}' for '{}'; keeping '{}'",
                        S::KIND,
                        S::SLOT_NAMES[slot],
                        code,
                        entry.name,
                        self.entries[*occupied.get()].name
                    );
                }
            }
        }
        self.entries.push(entry);
    }

    pub fn find_by_code(&self, code: &str, slot: S::Slot) -> Option<&CodeEntry> {
        let index = S::slot_index(slot);
        let key = S::case_rule(index).key(code);
        self.by_code
            .get(index)?
            .get(&key)
            .map(|&position| &self.entries[position])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CodeEntry> {
        self.by_name.get(name).map(|&position| &self.entries[position])
    }

    pub fn name_for_code(&self, code: &str, slot: S::Slot) -> Result<&str> {
        self.find_by_code(code, slot)
            .map(|entry| entry.name.as_str())
            .ok_or_else(|| {
                let label = format!("{} {}", S::KIND, S::SLOT_NAMES[S::slot_index(slot)]);
                Error::not_found(label, code)
            })
    }

    pub fn code_for_name(&self, name: &str, slot: S::Slot) -> Result<&str> {
        self.find_by_name(name)
            .and_then(|entry| entry.code(S::slot_index(slot)))
            .ok_or_else(|| Error::not_found(format!("{} name", S::KIND), name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.iter()
    }
}
