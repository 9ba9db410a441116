//! Sidebar navigation component.
//!
//! Lists every registered route. When expanded each entry shows its icon and
//! label; when collapsed only the icon. Selecting an entry asks the router to
//! navigate; the sidebar never touches the stores.

use crate::constants::SIDEBAR_TITLE;
use crate::icons::IconService;
use crate::pages::PageKind;
use crate::router::RouteTable;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::{LayoutManager, SidebarPresentation};
use crate::ui::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

/// One navigable sidebar line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub path: String,
    pub label: String,
    pub page: PageKind,
}

pub struct SidebarComponent {
    entries: Vec<SidebarEntry>,
    active: Option<usize>,
    list_state: ListState,
    presentation: SidebarPresentation,
    icons: IconService,
}

impl SidebarComponent {
    pub fn new(routes: &RouteTable, icons: IconService) -> Self {
        let entries = routes
            .routes()
            .iter()
            .map(|route| SidebarEntry {
                path: route.path.clone(),
                label: route.label.clone(),
                page: route.page,
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            entries,
            active: None,
            list_state,
            presentation: SidebarPresentation::Hidden,
            icons,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    /// Entry for the mounted page, if the current path is registered
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Highlighted entry (keyboard cursor)
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = index;
        if index.is_some() {
            self.list_state.select(index);
        }
    }

    #[must_use]
    pub fn presentation(&self) -> SidebarPresentation {
        self.presentation
    }

    pub fn set_presentation(&mut self, presentation: SidebarPresentation) {
        self.presentation = presentation;
    }

    fn move_cursor(&mut self, forward: bool) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
    }

    fn navigate_to(&self, index: usize) -> Action {
        self.entries
            .get(index)
            .map(|entry| Action::Navigate(entry.path.clone()))
            .unwrap_or(Action::None)
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if !LayoutManager::contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Skip the top and bottom border rows
                if mouse.row > area.y && mouse.row < area.y + area.height - 1 {
                    let clicked_index = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                    if clicked_index >= self.entries.len() {
                        return Action::None;
                    }
                    self.list_state.select(Some(clicked_index));
                    self.navigate_to(clicked_index)
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => {
                self.move_cursor(false);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.move_cursor(true);
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Number keys work even while the sidebar is hidden
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let index = c as usize - '1' as usize;
            return self.navigate_to(index);
        }

        if !self.presentation.is_visible() {
            return Action::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(true);
                Action::None
            }
            KeyCode::Enter => self.list_state.selected().map_or(Action::None, |index| self.navigate_to(index)),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let shows_labels = self.presentation.shows_labels();

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let icon = self.icons.page(entry.page);
                let text = if shows_labels {
                    format!(" {} {}", icon, entry.label)
                } else {
                    format!(" {icon}")
                };
                let style = if self.active == Some(index) {
                    palette.highlight()
                } else {
                    palette.surface_style()
                };
                ListItem::new(Line::from(Span::styled(text, style)))
            })
            .collect();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style())
            .style(palette.surface_style());
        if shows_labels {
            block = block.title(Span::styled(SIDEBAR_TITLE, palette.heading()));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
