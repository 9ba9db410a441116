//! Page mounted for paths that have no registered route.

use super::{PageKind, PageUnit};
use crate::constants::HOME_PATH;
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct NotFoundPage {
    path: String,
}

impl NotFoundPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The path that failed to resolve
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl PageUnit for NotFoundPage {
    fn kind(&self) -> Option<PageKind> {
        None
    }

    fn title(&self) -> &str {
        "Not Found"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("No page is registered for '{}'.", self.path),
                Style::default().fg(palette.warning),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("Press Backspace to go back or 1 to open {}.", HOME_PATH),
                palette.muted(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(self.title(), palette.accent()))
                .border_style(palette.border_style())
                .style(palette.surface_style()),
        );
        f.render_widget(body, area);
    }
}
