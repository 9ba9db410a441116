//! Header bar: menu button, title, quick links and the theme button.

use crate::constants::{APP_TITLE, HEADER_LINKS};
use crate::icons::IconService;
use crate::state::{Subscription, Theme, ThemeState};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::cell::Cell;
use std::rc::Rc;

/// Clickable areas from the last render
#[derive(Debug, Clone, Default)]
struct HitAreas {
    menu: Rect,
    theme: Rect,
    links: Vec<(Rect, &'static str)>,
}

/// Header bar.
///
/// The header follows the theme store through its own subscription so the
/// theme button always shows the current theme. Its controls only produce
/// actions; the shell applies them.
pub struct HeaderComponent {
    icons: IconService,
    theme: Rc<Cell<Theme>>,
    active_path: String,
    narrow: bool,
    hit_areas: HitAreas,
    subscription: Subscription,
}

impl HeaderComponent {
    pub fn new(theme_state: &ThemeState, icons: IconService, redraw: Rc<Cell<bool>>) -> Self {
        let theme = Rc::new(Cell::new(theme_state.theme()));
        let mirror = Rc::clone(&theme);
        let subscription = theme_state.subscribe(move |next| {
            mirror.set(next);
            redraw.set(true);
        });

        Self {
            icons,
            theme,
            active_path: String::new(),
            narrow: false,
            hit_areas: HitAreas::default(),
            subscription,
        }
    }

    /// Theme shown by the theme button
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_active_path(&mut self, path: &str) {
        self.active_path = path.to_string();
    }

    /// Quick links are hidden on narrow terminals
    pub fn set_narrow(&mut self, narrow: bool) {
        self.narrow = narrow;
    }

    /// Map a left click to the control under it
    #[must_use]
    pub fn handle_click(&self, column: u16, row: u16) -> Action {
        if LayoutManager::contains(self.hit_areas.menu, column, row) {
            return Action::ToggleSidebar;
        }
        if LayoutManager::contains(self.hit_areas.theme, column, row) {
            return Action::ToggleTheme;
        }
        self.hit_areas
            .links
            .iter()
            .find(|(area, _)| LayoutManager::contains(*area, column, row))
            .map(|(_, path)| Action::Navigate((*path).to_string()))
            .unwrap_or(Action::None)
    }

    fn render_links(&mut self, f: &mut Frame, inner: Rect, left_edge: u16, right_edge: u16, palette: &Palette) {
        const GAP: u16 = 2;
        let total: u16 = HEADER_LINKS
            .iter()
            .map(|(label, _)| label.len() as u16 + 2)
            .sum::<u16>()
            + GAP * (HEADER_LINKS.len() as u16 - 1);

        let centered = inner.x + inner.width.saturating_sub(total) / 2;
        let start = centered.max(left_edge + 1);
        if start + total >= right_edge {
            return;
        }

        let mut x = start;
        for (label, path) in HEADER_LINKS {
            let width = label.len() as u16 + 2;
            let area = Rect::new(x, inner.y, width, 1);
            let style = if self.active_path == path {
                palette.highlight()
            } else {
                palette.muted()
            };
            f.render_widget(Paragraph::new(Span::styled(format!(" {label} "), style)), area);
            self.hit_areas.links.push((area, path));
            x += width + GAP;
        }
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('m') => Action::ToggleSidebar,
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ToggleSidebar,
            KeyCode::Char('t') => Action::ToggleTheme,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style())
            .style(palette.surface_style());
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.hit_areas = HitAreas::default();
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let menu = Span::styled(format!(" {} ", self.icons.menu()), palette.accent());
        let menu_width = (menu.width() as u16).min(inner.width);
        let title = Span::styled(format!(" {APP_TITLE}"), palette.heading());
        let left_width = menu_width + title.width() as u16;
        f.render_widget(Paragraph::new(Line::from(vec![menu, title])), Rect { height: 1, ..inner });
        self.hit_areas.menu = Rect::new(inner.x, inner.y, menu_width, 1);

        let button = Span::styled(format!(" {} ", self.icons.theme_button(self.theme.get())), palette.accent());
        let button_width = (button.width() as u16).min(inner.width);
        let button_area = Rect::new(inner.right().saturating_sub(button_width), inner.y, button_width, 1);
        f.render_widget(Paragraph::new(Line::from(button)), button_area);
        self.hit_areas.theme = button_area;

        if !self.narrow {
            self.render_links(f, inner, inner.x + left_width, button_area.x, palette);
        }
    }
}

impl Drop for HeaderComponent {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}
