//! Static pages that only carry a heading and a short description.

use super::{PageKind, PageUnit};
use crate::ui::palette::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct PlaceholderPage {
    kind: PageKind,
    title: &'static str,
    summary: &'static str,
}

impl PlaceholderPage {
    fn new(kind: PageKind, title: &'static str, summary: &'static str) -> Self {
        Self { kind, title, summary }
    }

    pub fn scans() -> Self {
        Self::new(PageKind::Scans, "Scans", "Run and review profile scans.")
    }

    pub fn reports() -> Self {
        Self::new(PageKind::Reports, "Reports", "Summaries of past scans and repairs.")
    }

    pub fn repairs() -> Self {
        Self::new(PageKind::Repairs, "Repairs", "Repairs applied to conflicting profile files.")
    }

    pub fn settings() -> Self {
        Self::new(PageKind::Settings, "Settings", "Application preferences.")
    }

    pub fn profiles() -> Self {
        Self::new(PageKind::Profiles, "Profile Manager", "Profiles known to the doctor.")
    }

    pub fn conflicts() -> Self {
        Self::new(PageKind::Conflicts, "Conflicts", "Every conflict found across profiles.")
    }

    #[must_use]
    pub fn summary(&self) -> &'static str {
        self.summary
    }
}

impl PageUnit for PlaceholderPage {
    fn kind(&self) -> Option<PageKind> {
        Some(self.kind)
    }

    fn title(&self) -> &str {
        self.title
    }

    fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = Paragraph::new(vec![
            Line::from(Span::styled(self.summary, palette.muted())),
            Line::default(),
            Line::from(Span::styled("Nothing to show yet.", palette.muted())),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(self.title, palette.accent()))
                .border_style(palette.border_style())
                .style(palette.surface_style()),
        );
        f.render_widget(body, area);
    }
}
