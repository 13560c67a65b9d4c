//! # TUI Components
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: app name, loading spinner, error message, theme
//! - `DetailPanel`: the loaded country's detail rows
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `CountryPicker`: search box and filtered list, emits `PickerEvent::Select`
//!
//! Components receive store data as props (a `StoreState` snapshot or parts
//! of it), never by reaching into the store directly.

pub mod country_picker;
pub mod detail_panel;
pub mod title_bar;

pub use country_picker::{CountryPicker, CountryPickerState, PickerEvent};
pub use detail_panel::DetailPanel;
pub use title_bar::TitleBar;
