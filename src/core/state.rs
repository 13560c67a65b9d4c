//! # Store State
//!
//! Everything a view needs to render the country directory, in one struct.
//!
//! ```text
//! StoreState
//! ├── country_list: Vec<CountryOption>       // cached, sorted by label
//! ├── selected_country: Option<String>       // set by the view
//! ├── country_detail: Option<CountryDetail>  // last *resolved* detail fetch
//! ├── is_loading: bool                       // list fetch in flight
//! ├── is_loading_detail: bool                // detail fetch in flight
//! └── error_message: Option<String>          // last failure, cleared per attempt
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An entry in the searchable country list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    /// Common name, e.g. "France".
    pub label: String,
    /// Two-letter code, e.g. "FR".
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Display-ready detail for a single country.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryDetail {
    pub name: String,
    pub code: String,
    pub capital: Vec<String>,
    pub population: u64,
    pub currencies: BTreeMap<String, Currency>,
    pub languages: BTreeMap<String, String>,
    /// SVG flag URL.
    pub flag: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub country_list: Vec<CountryOption>,
    pub selected_country: Option<String>,
    pub country_detail: Option<CountryDetail>,
    pub is_loading: bool,
    pub is_loading_detail: bool,
    pub error_message: Option<String>,
}

impl StoreState {
    /// True while either fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_loading_detail
    }
}
