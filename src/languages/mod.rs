use crate::codes::{CodeIndex, CodeScheme};
use crate::data::{Delimiter, Source};
use crate::error::Result;

const BUNDLED_LANGUAGE_CODES: &str = include_str!("language-codes.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSlot {
    Code,
}

/// Language table rows: `name<TAB>code`. Names may contain spaces and punctuation.
#[derive(Debug, Clone, Copy)]
pub struct Language;

impl CodeScheme for Language {
    type Slot = LanguageSlot;

    const KIND: &'static str = "language";
    const SLOT_NAMES: &'static [&'static str] = &["code"];
    const DELIMITER: Delimiter = Delimiter::Tab;

    fn slot_index(slot: LanguageSlot) -> usize {
        match slot {
            LanguageSlot::Code => 0,
        }
    }
}

pub type LanguageIndex = CodeIndex<Language>;

pub fn bundled_source() -> Source {
    Source::Bundled {
        name: "language-codes.txt",
        content: BUNDLED_LANGUAGE_CODES,
    }
}

pub fn load_bundled() -> Result<LanguageIndex> {
    LanguageIndex::load(&bundled_source())
}
