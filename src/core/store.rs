//! # Country Store
//!
//! Owns the country list cache and the current detail record, and publishes
//! every change through a `tokio::sync::watch` channel.
//!
//! ```text
//!  view ── fetch_countries() ──► cache hit? ── yes ──► (nothing)
//!                                   │ no
//!                                   ▼
//!                         source.list_countries() ──► map, sort ──► state
//!
//!  view ── fetch_country_detail(code) ──► source.country_by_code() ──► first record ──► state
//! ```
//!
//! Failures never escape an operation: they become `error_message`.
//! Detail fetches are not correlated or cancelled, so when several are in
//! flight the one that settles last decides `country_detail`.

use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::watch;

use super::action::{Action, update};
use super::collation;
use super::state::{CountryDetail, CountryOption, StoreState};
use crate::source::{CountrySource, SourceError};

/// The two fetch operations, with their fixed failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fetch {
    Countries,
    Detail,
}

impl Fetch {
    /// Message used when the source answered with a non-success status.
    fn status_message(self) -> &'static str {
        match self {
            Fetch::Countries => "Network error",
            Fetch::Detail => "Failed to fetch country details",
        }
    }

    /// Message used when the failure carries no description.
    fn fallback_message(self) -> &'static str {
        match self {
            Fetch::Countries => "Failed to fetch countries.",
            Fetch::Detail => "Failed to fetch country details.",
        }
    }

    fn failure_message(self, err: &SourceError) -> String {
        match err {
            SourceError::Status(_) => self.status_message().to_string(),
            SourceError::Unknown => self.fallback_message().to_string(),
            other => other.to_string(),
        }
    }
}

pub struct CountryStore {
    source: Arc<dyn CountrySource>,
    state: watch::Sender<StoreState>,
}

impl CountryStore {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self { source, state }
    }

    /// Returns a receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Applies an action and notifies subscribers.
    pub fn dispatch(&self, action: Action) {
        self.state.send_modify(|state| update(state, action));
    }

    fn dispatch_all<const N: usize>(&self, actions: [Action; N]) {
        self.state.send_modify(|state| {
            for action in actions {
                update(state, action);
            }
        });
    }

    pub fn select_country(&self, code: Option<String>) {
        self.dispatch(Action::SelectCountry(code));
    }

    pub fn set_error_message(&self, message: Option<String>) {
        self.dispatch(Action::SetErrorMessage(message));
    }

    /// Loads the country list unless it is already cached.
    pub async fn fetch_countries(&self) {
        let cached = !self.state.borrow().country_list.is_empty();
        if cached {
            debug!("Country list cache hit, skipping fetch");
            return;
        }

        self.dispatch(Action::CountriesRequested);
        info!("Fetching country list via {}", self.source.name());

        let outcome = match self.source.list_countries().await {
            Ok(records) => {
                let mut options: Vec<CountryOption> =
                    records.into_iter().map(CountryOption::from).collect();
                collation::sort_options(&mut options);
                info!("Fetched {} countries", options.len());
                Action::CountriesLoaded(options)
            }
            Err(e) => {
                error!("Store: Error fetching countries: {}", e);
                Action::CountriesFailed(Fetch::Countries.failure_message(&e))
            }
        };

        self.dispatch_all([outcome, Action::CountriesSettled]);
    }

    /// Loads the detail record for `code`. Always hits the source.
    pub async fn fetch_country_detail(&self, code: &str) {
        self.dispatch(Action::DetailRequested);
        info!("Fetching country detail for {} via {}", code, self.source.name());

        let result = self
            .source
            .country_by_code(code)
            .await
            .and_then(|records| {
                records
                    .into_iter()
                    .next()
                    .ok_or_else(|| SourceError::NotFound(code.to_string()))
            });

        let outcome = match result {
            Ok(record) => Action::DetailLoaded(CountryDetail::from(record)),
            Err(e) => {
                error!("Store: Error fetching country details: {}", e);
                Action::DetailFailed(Fetch::Detail.failure_message(&e))
            }
        };

        self.dispatch_all([outcome, Action::DetailSettled]);
    }

    /// Empties the list cache so the next `fetch_countries()` hits the source.
    pub fn clear_countries_cache(&self) {
        self.dispatch(Action::ClearCountriesCache);
    }
}
