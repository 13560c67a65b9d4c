//! # Actions
//!
//! Every change to the store's state is an `Action`.
//! A list fetch starting? That's `Action::CountriesRequested`.
//! The response arriving? That's `Action::CountriesLoaded(options)`.
//!
//! The `update()` function applies an action to the state. No I/O here:
//! the store performs requests and dispatches the outcome.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! Each fetch is a `*Requested` action, one outcome (`*Loaded` or `*Failed`),
//! then `*Settled`, which always runs.

use log::debug;

use super::state::{CountryDetail, CountryOption, StoreState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CountriesRequested,
    CountriesLoaded(Vec<CountryOption>),
    CountriesFailed(String),
    CountriesSettled,
    DetailRequested,
    DetailLoaded(CountryDetail),
    DetailFailed(String),
    DetailSettled,
    ClearCountriesCache,
    SelectCountry(Option<String>),
    SetErrorMessage(Option<String>),
}

pub fn update(state: &mut StoreState, action: Action) {
    match action {
        Action::CountriesRequested => {
            state.is_loading = true;
            state.error_message = None;
        }
        Action::CountriesLoaded(options) => {
            debug!("Country list updated: {} entries", options.len());
            state.country_list = options;
        }
        Action::CountriesFailed(message) => {
            state.error_message = Some(message);
            state.country_list.clear();
        }
        Action::CountriesSettled => {
            state.is_loading = false;
        }
        Action::DetailRequested => {
            state.is_loading_detail = true;
            state.error_message = None;
        }
        Action::DetailLoaded(detail) => {
            debug!("Country detail updated: {}", detail.code);
            state.country_detail = Some(detail);
        }
        Action::DetailFailed(message) => {
            state.error_message = Some(message);
            state.country_detail = None;
        }
        Action::DetailSettled => {
            state.is_loading_detail = false;
        }
        Action::ClearCountriesCache => {
            state.country_list.clear();
        }
        Action::SelectCountry(code) => {
            state.selected_country = code;
        }
        Action::SetErrorMessage(message) => {
            state.error_message = message;
        }
    }
}
