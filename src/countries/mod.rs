use crate::codes::{CodeIndex, CodeScheme};
use crate::data::{Delimiter, Source};
use crate::error::Result;

const BUNDLED_COUNTRY_CODES: &str = include_str!("country-codes.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountrySlot {
    Alpha2,
    Alpha3,
    Numeric,
}

/// ISO 3166-1 rows: `name... alpha2 alpha3 numeric`, whitespace separated.
#[derive(Debug, Clone, Copy)]
pub struct Country;

impl CodeScheme for Country {
    type Slot = CountrySlot;

    const KIND: &'static str = "country";
    const SLOT_NAMES: &'static [&'static str] = &["alpha2", "alpha3", "numeric"];
    const DELIMITER: Delimiter = Delimiter::Whitespace;

    fn slot_index(slot: CountrySlot) -> usize {
        match slot {
            CountrySlot::Alpha2 => 0,
            CountrySlot::Alpha3 => 1,
            CountrySlot::Numeric => 2,
        }
    }
}

pub type CountryIndex = CodeIndex<Country>;

pub fn bundled_source() -> Source {
    Source::Bundled {
        name: "country-codes.txt",
        content: BUNDLED_COUNTRY_CODES,
    }
}

pub fn load_bundled() -> Result<CountryIndex> {
    CountryIndex::load(&bundled_source())
}
