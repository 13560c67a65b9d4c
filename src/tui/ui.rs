use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::StoreState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryPicker, DetailPanel, TitleBar};
use crate::tui::palette::Palette;

const HELP: &str = " Type to search  ↑↓ Move  Enter Show  Ctrl+R Reload  Ctrl+T Theme  Esc Quit ";

pub fn draw_ui(frame: &mut Frame, state: &StoreState, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};

    let palette = Palette::for_theme(tui.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [picker_area, detail_area] =
        Layout::horizontal([Percentage(40), Percentage(60)]).areas(main_area);

    TitleBar {
        state,
        theme: tui.theme,
        spinner_frame,
        palette,
    }
    .render(frame, title_area);

    // Keep the picker in sync with the store's (possibly refetched) list
    tui.picker.set_options(&state.country_list);
    CountryPicker::new(
        &mut tui.picker,
        palette,
        state.is_loading,
        state.selected_country.as_deref(),
    )
    .render(frame, picker_area);

    DetailPanel {
        detail: state.country_detail.as_ref(),
        loading: state.is_loading_detail,
        palette,
    }
    .render(frame, detail_area);

    frame.render_widget(
        Paragraph::new(Line::from(HELP)).style(palette.muted()),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{CountryDetail, CountryOption};
    use crate::core::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draw_ui_empty_state() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = StoreState::default();
        let mut tui = TuiState::new(Theme::Light);
        terminal
            .draw(|f| draw_ui(f, &state, &mut tui, 0))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Atlas"));
        assert!(text.contains("No countries loaded."));
        assert!(text.contains("Select a country and press Enter."));
        assert!(text.contains("theme: light"));
    }

    #[test]
    fn test_draw_ui_with_data() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = StoreState {
            country_list: vec![
                CountryOption {
                    label: "France".to_string(),
                    value: "FR".to_string(),
                },
                CountryOption {
                    label: "Japan".to_string(),
                    value: "JP".to_string(),
                },
            ],
            selected_country: Some("FR".to_string()),
            country_detail: Some(CountryDetail {
                name: "France".to_string(),
                code: "FR".to_string(),
                capital: vec!["Paris".to_string()],
                population: 67_390_000,
                currencies: Default::default(),
                languages: Default::default(),
                flag: "https://flagcdn.com/fr.svg".to_string(),
            }),
            ..Default::default()
        };
        let mut tui = TuiState::new(Theme::Dark);
        terminal
            .draw(|f| draw_ui(f, &state, &mut tui, 0))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("2 countries"));
        assert!(text.contains("Japan"));
        assert!(text.contains("Paris"));
        assert!(text.contains("67,390,000"));
        assert!(text.contains("theme: dark"));
        assert_eq!(tui.picker.visible_len(), 2);
    }

    #[test]
    fn test_draw_ui_shows_error() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = StoreState {
            error_message: Some("Network error".to_string()),
            ..Default::default()
        };
        let mut tui = TuiState::new(Theme::Light);
        terminal
            .draw(|f| draw_ui(f, &state, &mut tui, 0))
            .unwrap();

        assert!(buffer_text(&terminal).contains("Error: Network error"));
    }
}
