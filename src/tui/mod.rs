//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into store calls.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws when something changed:
//!
//! - a terminal event arrived,
//! - the store published a new state (the `watch` receiver reports a change),
//! - a fetch is in flight (the spinner animates at ~12fps).
//!
//! Otherwise it sleeps up to 500ms waiting for input.
//!
//! Fetches run on spawned tokio tasks against a shared `Arc<CountryStore>`.
//! Nothing is cancelled: selecting another country while a detail fetch is
//! in flight starts a second fetch, and whichever settles last is shown.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{debug, info};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::store::CountryStore;
use crate::core::theme::Theme;
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryPickerState, PickerEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the store)
pub struct TuiState {
    pub picker: CountryPickerState,
    pub theme: Theme,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            picker: CountryPickerState::new(),
            theme,
        }
    }
}

/// What the event loop should do after handling one event.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    None,
    Quit,
    FetchCountries,
    FetchDetail(String),
}

/// Applies one event to the store and TUI state. Returns any async work the
/// event loop must spawn.
fn handle_event(store: &CountryStore, tui: &mut TuiState, event: TuiEvent) -> Command {
    match event {
        TuiEvent::Quit => Command::Quit,
        TuiEvent::Resize => Command::None,
        TuiEvent::ToggleTheme => {
            tui.theme = tui.theme.toggle();
            info!("Theme switched to {}", tui.theme);
            Command::None
        }
        TuiEvent::Refresh => {
            store.clear_countries_cache();
            Command::FetchCountries
        }
        other => match tui.picker.handle_event(&other) {
            Some(PickerEvent::Select(code)) => {
                store.select_country(Some(code.clone()));
                Command::FetchDetail(code)
            }
            None => Command::None,
        },
    }
}

fn spawn_fetch_countries(store: &Arc<CountryStore>) {
    let store = store.clone();
    tokio::spawn(async move {
        store.fetch_countries().await;
    });
}

fn spawn_fetch_detail(store: &Arc<CountryStore>, code: String) {
    let store = store.clone();
    tokio::spawn(async move {
        store.fetch_country_detail(&code).await;
    });
}

pub fn run(config: ResolvedConfig, store: Arc<CountryStore>) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.theme);
    let mut updates = store.subscribe();

    let mut terminal = ratatui::init();

    spawn_fetch_countries(&store);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let animating = updates.borrow().is_busy();
        if animating {
            needs_redraw = true;
        }

        // A changed watch value means a fetch started, finished, or failed
        if updates.has_changed().unwrap_or(false) {
            needs_redraw = true;
        }

        if needs_redraw {
            let state = updates.borrow_and_update().clone();
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &state, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            debug!("TUI event: {:?}", event);
            match handle_event(&store, &mut tui, event) {
                Command::None => {}
                Command::Quit => {
                    should_quit = true;
                    break;
                }
                Command::FetchCountries => spawn_fetch_countries(&store),
                Command::FetchDetail(code) => spawn_fetch_detail(&store, code),
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("TUI exited");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedSource, mock_countries};

    fn store() -> CountryStore {
        let source = Arc::new(ScriptedSource::new());
        source.push_list(Ok(mock_countries()));
        CountryStore::new(source)
    }

    #[tokio::test]
    async fn test_enter_selects_and_requests_detail() {
        let store = store();
        store.fetch_countries().await;
        let mut tui = TuiState::new(Theme::Light);
        tui.picker.set_options(&store.snapshot().country_list);

        handle_event(&store, &mut tui, TuiEvent::CursorDown);
        let command = handle_event(&store, &mut tui, TuiEvent::Submit);

        assert_eq!(command, Command::FetchDetail("FR".to_string()));
        assert_eq!(store.snapshot().selected_country.as_deref(), Some("FR"));
    }

    #[test]
    fn test_refresh_clears_cache() {
        let store = store();
        store.dispatch(crate::core::action::Action::CountriesLoaded(vec![
            crate::core::state::CountryOption {
                label: "France".to_string(),
                value: "FR".to_string(),
            },
        ]));
        let mut tui = TuiState::new(Theme::Light);

        let command = handle_event(&store, &mut tui, TuiEvent::Refresh);

        assert_eq!(command, Command::FetchCountries);
        assert!(store.snapshot().country_list.is_empty());
    }

    #[test]
    fn test_toggle_theme() {
        let store = store();
        let mut tui = TuiState::new(Theme::Light);
        assert_eq!(
            handle_event(&store, &mut tui, TuiEvent::ToggleTheme),
            Command::None
        );
        assert_eq!(tui.theme, Theme::Dark);
    }

    #[test]
    fn test_typing_does_not_touch_store() {
        let store = store();
        let mut tui = TuiState::new(Theme::Light);
        handle_event(&store, &mut tui, TuiEvent::InputChar('f'));
        assert_eq!(tui.picker.query, "f");
        assert_eq!(store.snapshot().selected_country, None);
    }

    #[test]
    fn test_quit() {
        let store = store();
        let mut tui = TuiState::new(Theme::Light);
        assert_eq!(handle_event(&store, &mut tui, TuiEvent::Quit), Command::Quit);
    }
}
