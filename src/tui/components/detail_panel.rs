use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::state::CountryDetail;
use crate::report;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

/// Right-hand panel showing the loaded country.
pub struct DetailPanel<'a> {
    pub detail: Option<&'a CountryDetail>,
    pub loading: bool,
    pub palette: Palette,
}

impl DetailPanel<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        if self.loading {
            return vec![Line::styled("Loading country details...", self.palette.muted())];
        }
        let Some(detail) = self.detail else {
            return vec![Line::styled(
                "Select a country and press Enter.",
                self.palette.muted(),
            )];
        };

        let label_style = self.palette.muted();
        let value_style = self.palette.base();
        let rows = report::detail_rows(detail);
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(Line::styled(
            detail.name.clone(),
            value_style.add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(""));
        // Name is already the heading
        for (label, value) in rows.into_iter().skip(1) {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<width$}  "), label_style),
                Span::styled(value, value_style),
            ]));
        }
        lines
    }
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(" Details ")
            .padding(Padding::horizontal(1))
            .style(self.palette.base());

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
