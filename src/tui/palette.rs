use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

/// Colours for one theme. Components take a `Palette` prop instead of
/// hard-coding colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            // #f9fafb on #111827 and back, as in the web colour modes
            Theme::Light => Self {
                background: Color::Rgb(0xf9, 0xfa, 0xfb),
                foreground: Color::Rgb(0x11, 0x18, 0x27),
                muted: Color::Rgb(0x6b, 0x72, 0x80),
                accent: Color::Rgb(0x25, 0x63, 0xeb),
                border: Color::Rgb(0xe5, 0xe7, 0xeb),
                error: Color::Rgb(0xdc, 0x26, 0x26),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x11, 0x18, 0x27),
                foreground: Color::Rgb(0xf3, 0xf4, 0xf6),
                muted: Color::Rgb(0x9c, 0xa3, 0xaf),
                accent: Color::Rgb(0x60, 0xa5, 0xfa),
                border: Color::Rgb(0x37, 0x41, 0x51),
                error: Color::Rgb(0xf8, 0x71, 0x71),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        self.base().fg(self.border)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        self.base().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
