//! Overlay listing recent log lines, newest first.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub struct LogsOverlay {
    logger: Logger,
    visible: bool,
    scroll: u16,
}

impl LogsOverlay {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            visible: false,
            scroll: 0,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Component for LogsOverlay {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.logger.len().saturating_sub(1) as u16;
                self.scroll = (self.scroll + 1).min(max);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowLogs(visible) => {
                self.visible = visible;
                self.scroll = 0;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        if !self.visible {
            return;
        }

        let area = LayoutManager::centered_rect(80, 70, rect);
        let lines: Vec<Line> = self
            .logger
            .get_logs()
            .into_iter()
            .map(|line| Line::from(Span::styled(line, palette.muted())))
            .collect();

        let body = Paragraph::new(lines).scroll((self.scroll, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(DIALOG_TITLE_LOGS, palette.heading()))
                .border_style(palette.border_style())
                .style(palette.surface_style()),
        );

        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}
