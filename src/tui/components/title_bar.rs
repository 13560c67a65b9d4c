//! # TitleBar Component
//!
//! Top status bar showing application state and notifications.
//!
//! ## Responsibilities
//!
//! - Display the application name and the number of loaded countries
//! - Show a spinner while either fetch is in flight
//! - Show the store's error message, which takes priority over everything else
//! - Show the active theme
//!
//! ## Conditional Formatting
//!
//! The status text changes based on state, in priority order:
//!
//! 1. **Error**: `"Atlas | Error: Network error"`
//! 2. **Loading**: `"Atlas | ⠋ Loading countries..."`
//! 3. **Default**: `"Atlas | 250 countries"`
//!
//! The theme label is right-aligned on the same line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::StoreState;
use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Top status bar component.
///
/// # Props
///
/// - `state`: the store snapshot being rendered
/// - `theme`: the active theme, shown on the right
/// - `spinner_frame`: animation counter, advanced by the event loop
pub struct TitleBar<'a> {
    pub state: &'a StoreState,
    pub theme: Theme,
    pub spinner_frame: usize,
    pub palette: Palette,
}

impl TitleBar<'_> {
    /// The left-hand status text (without the app name).
    pub fn status_text(&self) -> String {
        if let Some(error) = &self.state.error_message {
            return format!("Error: {error}");
        }
        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        if self.state.is_loading {
            return format!("{spinner} Loading countries...");
        }
        if self.state.is_loading_detail {
            return format!("{spinner} Loading details...");
        }
        match self.state.country_list.len() {
            1 => "1 country".to_string(),
            n => format!("{n} countries"),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status_style = if self.state.error_message.is_some() {
            self.palette.error()
        } else {
            self.palette.muted()
        };

        let theme_text = format!("theme: {} ", self.theme.label());
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(theme_text.len() as u16),
        ])
        .areas(area);

        let status = Paragraph::new(Line::from(vec![
            Span::styled(" Atlas", self.palette.base().fg(self.palette.accent)),
            Span::styled(" | ", self.palette.muted()),
            Span::styled(self.status_text(), status_style),
        ]))
        .style(self.palette.base());
        frame.render_widget(status, left);

        frame.render_widget(
            Paragraph::new(theme_text).style(self.palette.muted()),
            right,
        );
    }
}
