//! Key binding reference.

use super::{PageKind, PageUnit};
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Row, Table},
    Frame,
};

/// (keys, description), grouped by section headings with empty keys
pub const KEY_BINDINGS: [(&str, &str); 15] = [
    ("", "LAYOUT"),
    ("m / Ctrl+B", "Open or collapse the sidebar"),
    ("t", "Switch between light and dark theme"),
    ("", "NAVIGATION"),
    ("↑↓ / j k", "Move through sidebar entries"),
    ("Enter", "Open the highlighted entry"),
    ("1-9", "Open the n-th sidebar entry"),
    ("Backspace", "Go back to the previous page"),
    ("?", "Open this help page"),
    ("", "DASHBOARD"),
    ("Tab", "Switch between logs and scan reports"),
    ("", "GENERAL"),
    ("G", "Show recent log lines"),
    ("q / Ctrl+C", "Quit"),
    ("Mouse", "Click the menu, theme button, header links or sidebar entries"),
];

#[derive(Debug, Default)]
pub struct HelpPage;

impl HelpPage {
    pub fn new() -> Self {
        Self
    }
}

impl PageUnit for HelpPage {
    fn kind(&self) -> Option<PageKind> {
        Some(PageKind::Help)
    }

    fn title(&self) -> &str {
        "Help"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let rows = KEY_BINDINGS.iter().map(|(keys, description)| {
            if keys.is_empty() {
                Row::new(vec![Span::styled(*description, palette.heading())])
            } else {
                Row::new(vec![
                    Span::styled(*keys, palette.accent()),
                    Span::styled(*description, palette.muted()),
                ])
            }
        });

        let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(self.title(), palette.accent()))
                .border_style(palette.border_style())
                .style(palette.surface_style()),
        );
        f.render_widget(table, area);
    }
}
