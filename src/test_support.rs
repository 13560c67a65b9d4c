//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::core::state::Currency;
use crate::source::{
    CountryDetailRecord, CountryName, CountrySource, CountrySummaryRecord, Flags, SourceError,
};

/// A queued response, optionally held back until its gate is released.
struct Scripted<T> {
    result: Result<T, SourceError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// An in-memory source that replays queued responses in call order.
///
/// Gated responses stay pending until the returned sender fires, which lets
/// tests decide the order in which concurrent requests resolve.
#[derive(Default)]
pub struct ScriptedSource {
    lists: Mutex<VecDeque<Scripted<Vec<CountrySummaryRecord>>>>,
    details: Mutex<VecDeque<Scripted<Vec<CountryDetailRecord>>>>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    requested_codes: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<Vec<CountrySummaryRecord>, SourceError>) {
        self.lists.lock().unwrap().push_back(Scripted { result, gate: None });
    }

    pub fn push_list_gated(
        &self,
        result: Result<Vec<CountrySummaryRecord>, SourceError>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.lists.lock().unwrap().push_back(Scripted {
            result,
            gate: Some(rx),
        });
        tx
    }

    pub fn push_detail(&self, result: Result<Vec<CountryDetailRecord>, SourceError>) {
        self.details
            .lock()
            .unwrap()
            .push_back(Scripted { result, gate: None });
    }

    pub fn push_detail_gated(
        &self,
        result: Result<Vec<CountryDetailRecord>, SourceError>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.details.lock().unwrap().push_back(Scripted {
            result,
            gate: Some(rx),
        });
        tx
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn requested_codes(&self) -> Vec<String> {
        self.requested_codes.lock().unwrap().clone()
    }
}

async fn replay<T>(next: Option<Scripted<T>>) -> Result<T, SourceError> {
    let Some(scripted) = next else {
        return Err(SourceError::Network("no scripted response".to_string()));
    };
    if let Some(gate) = scripted.gate {
        let _ = gate.await;
    }
    scripted.result
}

#[async_trait]
impl CountrySource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn list_countries(&self) -> Result<Vec<CountrySummaryRecord>, SourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.lists.lock().unwrap().pop_front();
        replay(next).await
    }

    async fn country_by_code(&self, code: &str) -> Result<Vec<CountryDetailRecord>, SourceError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_codes.lock().unwrap().push(code.to_string());
        let next = self.details.lock().unwrap().pop_front();
        replay(next).await
    }
}

pub fn summary(name: &str, code: &str) -> CountrySummaryRecord {
    CountrySummaryRecord {
        name: CountryName {
            common: name.to_string(),
        },
        cca2: code.to_string(),
    }
}

/// The five countries used throughout the store tests, unsorted.
pub fn mock_countries() -> Vec<CountrySummaryRecord> {
    vec![
        summary("United States", "US"),
        summary("France", "FR"),
        summary("Germany", "DE"),
        summary("Japan", "JP"),
        summary("Brazil", "BR"),
    ]
}

/// A detail record with every optional field present but empty.
pub fn detail_record(name: &str, code: &str) -> CountryDetailRecord {
    let lower = code.to_lowercase();
    CountryDetailRecord {
        name: CountryName {
            common: name.to_string(),
        },
        cca2: code.to_string(),
        capital: Some(vec![]),
        population: 0,
        currencies: Some(BTreeMap::new()),
        languages: Some(BTreeMap::new()),
        flags: Flags {
            svg: format!("https://flagcdn.com/{lower}.svg"),
            png: format!("https://flagcdn.com/w320/{lower}.png"),
        },
    }
}

fn currency(code: &str, name: &str, symbol: &str) -> BTreeMap<String, Currency> {
    BTreeMap::from([(
        code.to_string(),
        Currency {
            name: name.to_string(),
            symbol: symbol.to_string(),
        },
    )])
}

/// Detail responses for US, FR and DE, shaped like `GET /alpha/{code}`.
pub fn mock_detail(code: &str) -> Vec<CountryDetailRecord> {
    let record = match code {
        "US" => CountryDetailRecord {
            capital: Some(vec!["Washington, D.C.".to_string()]),
            population: 331_900_000,
            currencies: Some(currency("USD", "United States dollar", "$")),
            languages: Some(BTreeMap::from([("eng".to_string(), "English".to_string())])),
            ..detail_record("United States", "US")
        },
        "FR" => CountryDetailRecord {
            capital: Some(vec!["Paris".to_string()]),
            population: 67_390_000,
            currencies: Some(currency("EUR", "Euro", "€")),
            languages: Some(BTreeMap::from([("fra".to_string(), "French".to_string())])),
            ..detail_record("France", "FR")
        },
        "DE" => CountryDetailRecord {
            capital: Some(vec!["Berlin".to_string()]),
            population: 83_240_000,
            currencies: Some(currency("EUR", "Euro", "€")),
            languages: Some(BTreeMap::from([("deu".to_string(), "German".to_string())])),
            ..detail_record("Germany", "DE")
        },
        other => detail_record(other, other),
    };
    vec![record]
}
