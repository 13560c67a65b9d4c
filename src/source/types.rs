//! Wire types for the REST Countries v3.1 API, and their translation into
//! the store's domain types.
//!
//! Decoding is deliberately lenient on the list endpoint: an entry with a
//! missing or oddly-shaped `name`, or a missing `cca2`, decodes to empty
//! strings instead of failing the whole response.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::state::{CountryDetail, CountryOption, Currency};

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
}

/// One entry of `GET /all?fields=name,cca2`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CountrySummaryRecord {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: CountryName,
    #[serde(default)]
    pub cca2: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub png: String,
}

/// One entry of `GET /alpha/{code}`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CountryDetailRecord {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: CountryName,
    #[serde(default)]
    pub cca2: String,
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: u64,
    pub currencies: Option<BTreeMap<String, Currency>>,
    pub languages: Option<BTreeMap<String, String>>,
    pub flags: Flags,
}

/// Accepts `{"common": "..."}`, but also anything else (a bare string, null)
/// as an empty name.
fn lenient_name<'de, D>(deserializer: D) -> Result<CountryName, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let common = value
        .get("common")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Ok(CountryName { common })
}

impl From<CountrySummaryRecord> for CountryOption {
    fn from(record: CountrySummaryRecord) -> Self {
        CountryOption {
            label: record.name.common,
            value: record.cca2,
        }
    }
}

impl From<CountryDetailRecord> for CountryDetail {
    fn from(record: CountryDetailRecord) -> Self {
        CountryDetail {
            name: record.name.common,
            code: record.cca2,
            capital: record.capital.unwrap_or_default(),
            population: record.population,
            currencies: record.currencies.unwrap_or_default(),
            languages: record.languages.unwrap_or_default(),
            flag: record.flags.svg,
        }
    }
}
