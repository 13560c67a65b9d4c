//! # Country Picker Component
//!
//! Search box plus the filtered country list. Typing narrows the list,
//! Up/Down/PageUp/PageDown/Home/End move the highlight, Enter emits the
//! highlighted code.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryPickerState` lives in `TuiState`
//! - `CountryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::collation;
use crate::core::state::CountryOption;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

const PAGE: usize = 10;

/// Persistent state for the picker.
#[derive(Default)]
pub struct CountryPickerState {
    pub query: String,
    options: Vec<CountryOption>,
    /// Indices into `options` that match `query`, in list order.
    visible: Vec<usize>,
    selected: usize,
    pub list_state: ListState,
}

/// Events emitted by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Select(String),
}

impl CountryPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the option list, keeping the highlighted country if it is
    /// still visible. No-op when the list is unchanged.
    pub fn set_options(&mut self, options: &[CountryOption]) {
        if self.options == options {
            return;
        }
        let keep = self.highlighted().map(|o| o.value.clone());
        self.options = options.to_vec();
        self.refilter();
        let pos = keep.and_then(|code| {
            self.visible
                .iter()
                .position(|&i| self.options[i].value == code)
        });
        if let Some(pos) = pos {
            self.select(pos);
        }
    }

    pub fn visible_options(&self) -> impl Iterator<Item = &CountryOption> {
        self.visible.iter().map(|&i| &self.options[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn highlighted(&self) -> Option<&CountryOption> {
        self.visible.get(self.selected).map(|&i| &self.options[i])
    }

    fn refilter(&mut self) {
        self.visible = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, o)| collation::matches(o, &self.query))
            .map(|(i, _)| i)
            .collect();
        self.select(0);
    }

    fn select(&mut self, index: usize) {
        if self.visible.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = index.min(self.visible.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

impl EventHandler for CountryPickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                self.refilter();
                None
            }
            TuiEvent::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
                None
            }
            TuiEvent::ClearInput => {
                self.query.clear();
                self.refilter();
                None
            }
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::PageUp => {
                self.select(self.selected.saturating_sub(PAGE));
                None
            }
            TuiEvent::PageDown => {
                self.select(self.selected + PAGE);
                None
            }
            TuiEvent::Home => {
                self.select(0);
                None
            }
            TuiEvent::End => {
                self.select(usize::MAX);
                None
            }
            TuiEvent::Submit => self
                .highlighted()
                .map(|option| PickerEvent::Select(option.value.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the picker.
pub struct CountryPicker<'a> {
    state: &'a mut CountryPickerState,
    palette: Palette,
    loading: bool,
    selected_code: Option<&'a str>,
}

impl<'a> CountryPicker<'a> {
    pub fn new(
        state: &'a mut CountryPickerState,
        palette: Palette,
        loading: bool,
        selected_code: Option<&'a str>,
    ) -> Self {
        Self {
            state,
            palette,
            loading,
            selected_code,
        }
    }
}

impl Component for CountryPicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let search = Paragraph::new(Line::from(vec![
            Span::styled("> ", self.palette.muted()),
            Span::styled(self.state.query.as_str(), self.palette.base()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.palette.border())
                .title(" Search ")
                .style(self.palette.base()),
        );
        frame.render_widget(search, search_area);

        let title = format!(" Countries ({}) ", self.state.visible_len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(title)
            .padding(Padding::horizontal(1))
            .style(self.palette.base());

        if self.state.visible.is_empty() {
            let message = if self.loading {
                "Loading countries..."
            } else if self.state.options.is_empty() {
                "No countries loaded."
            } else {
                "No matches."
            };
            frame.render_widget(
                Paragraph::new(message).style(self.palette.muted()).block(block),
                list_area,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .visible_options()
            .map(|option| {
                let marker = if Some(option.value.as_str()) == self.selected_code {
                    "* "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{:<4}", option.value), self.palette.muted()),
                    Span::raw(option.label.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.palette.highlight());
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
