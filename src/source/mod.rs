pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{CountrySource, SourceError};
pub use providers::RestCountriesSource;
pub use types::{CountryDetailRecord, CountryName, CountrySummaryRecord, Flags};
