//! Footer line with legal text.

use crate::constants::{FOOTER_COPYRIGHT, FOOTER_LINKS};
use crate::ui::core::{actions::Action, Component};
use crate::ui::palette::Palette;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for FooterComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let links = FOOTER_LINKS.join("  ");
        let links_width = links.chars().count() as u16 + 1;
        let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(links_width)]).areas(rect);

        f.render_widget(
            Paragraph::new(Span::styled(format!(" {FOOTER_COPYRIGHT}"), palette.muted())).style(palette.base()),
            left,
        );
        f.render_widget(
            Paragraph::new(Span::styled(links, palette.muted()))
                .alignment(Alignment::Right)
                .style(palette.base()),
            right,
        );
    }
}
