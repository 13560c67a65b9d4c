//! # Core Application Logic
//!
//! The country store and everything it needs. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • StoreState           │
//!                    │  • Action + update()    │
//!                    │  • CountryStore         │
//!                    └───────────┬─────────────┘
//!                                │ watch::Receiver<StoreState>
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    CLI     │
//!             │ (ratatui)  │          │ (report)   │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `StoreState` and the domain records it holds
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`store`]: `CountryStore`, which performs fetches and dispatches actions
//! - [`collation`]: locale-aware sorting and search matching
//! - [`config`]: config file loading and resolution
//! - [`theme`]: light/dark theme selection

pub mod action;
pub mod collation;
pub mod config;
pub mod state;
pub mod store;
pub mod theme;
