//! Plain-text rendering of store data, shared by the CLI subcommands and the
//! TUI detail panel.

use unicode_width::UnicodeWidthStr;

use crate::core::collation;
use crate::core::state::{CountryDetail, CountryOption};
use crate::core::store::CountryStore;

/// Formats an integer with comma thousands separators: `1234567` → `1,234,567`.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The labelled rows shown for a country, in display order.
pub fn detail_rows(detail: &CountryDetail) -> Vec<(&'static str, String)> {
    let capital = if detail.capital.is_empty() {
        "n/a".to_string()
    } else {
        detail.capital.join(", ")
    };

    let currencies = if detail.currencies.is_empty() {
        "n/a".to_string()
    } else {
        detail
            .currencies
            .iter()
            .map(|(code, currency)| {
                if currency.symbol.is_empty() {
                    format!("{} ({code})", currency.name)
                } else {
                    format!("{} ({code}, {})", currency.name, currency.symbol)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    let languages = if detail.languages.is_empty() {
        "n/a".to_string()
    } else {
        detail.languages.values().cloned().collect::<Vec<_>>().join(", ")
    };

    vec![
        ("Name", detail.name.clone()),
        ("Code", detail.code.clone()),
        ("Capital", capital),
        ("Population", format_population(detail.population)),
        ("Currencies", currencies),
        ("Languages", languages),
        ("Flag", detail.flag.clone()),
    ]
}

pub fn render_detail(detail: &CountryDetail) -> String {
    let rows = detail_rows(detail);
    let width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{label:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `CODE  Name` line per option.
pub fn render_list(options: &[&CountryOption]) -> String {
    options
        .iter()
        .map(|o| {
            let pad = 4usize.saturating_sub(o.value.width());
            format!("{}{}{}", o.value, " ".repeat(pad), o.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetches the country list and renders the entries matching `filter`.
///
/// Returns the store's error message when the fetch failed.
pub async fn list_countries(store: &CountryStore, filter: Option<&str>) -> Result<String, String> {
    store.fetch_countries().await;
    let state = store.snapshot();
    if let Some(message) = state.error_message {
        return Err(message);
    }
    let matched = collation::filter(&state.country_list, filter.unwrap_or_default());
    Ok(render_list(&matched))
}

/// Fetches one country's detail and renders it as text or pretty JSON.
pub async fn show_country(store: &CountryStore, code: &str, json: bool) -> Result<String, String> {
    store.select_country(Some(code.to_string()));
    store.fetch_country_detail(code).await;
    let state = store.snapshot();
    if let Some(message) = state.error_message {
        return Err(message);
    }
    let detail = state
        .country_detail
        .ok_or_else(|| format!("no detail loaded for '{code}'"))?;
    if json {
        serde_json::to_string_pretty(&detail).map_err(|e| e.to_string())
    } else {
        Ok(render_detail(&detail))
    }
}
