use std::fmt;

use async_trait::async_trait;

use super::types::{CountryDetailRecord, CountrySummaryRecord};

/// Errors that can occur while talking to a country data source.
///
/// The store folds these into a user-facing message: `Status` and `Unknown`
/// map to fixed per-operation messages, everything else is shown verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Source misconfigured (bad base URL, client could not be built).
    Config(String),
    /// The source answered, but with a non-success status.
    Status(u16),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The response body could not be decoded.
    Parse(String),
    /// The detail endpoint answered with no records for the code.
    NotFound(String),
    /// The request failed without anything describable attached.
    Unknown,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "{msg}"),
            SourceError::Status(status) => write!(f, "HTTP {status}"),
            SourceError::Network(msg) => write!(f, "{msg}"),
            SourceError::Parse(msg) => write!(f, "{msg}"),
            SourceError::NotFound(code) => write!(f, "no country data returned for '{code}'"),
            SourceError::Unknown => write!(f, "unknown error"),
        }
    }
}

impl std::error::Error for SourceError {}

#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches the summary (name + code) of every known country.
    async fn list_countries(&self) -> Result<Vec<CountrySummaryRecord>, SourceError>;

    /// Fetches the detail records matching `code`. Sources return the raw
    /// array; callers decide which record to use.
    async fn country_by_code(&self, code: &str) -> Result<Vec<CountryDetailRecord>, SourceError>;
}
