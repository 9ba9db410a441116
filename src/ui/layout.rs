//! Layout management and calculations

use crate::config::UiConfig;
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// How the sidebar is drawn for the current state and terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPresentation {
    /// Full width, icon and label per entry
    Expanded(u16),
    /// Narrow strip, icons only
    Collapsed(u16),
    /// Not drawn at all (narrow terminal)
    Hidden,
}

impl SidebarPresentation {
    #[must_use]
    pub fn width(self) -> u16 {
        match self {
            SidebarPresentation::Expanded(width) | SidebarPresentation::Collapsed(width) => width,
            SidebarPresentation::Hidden => 0,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, SidebarPresentation::Hidden)
    }

    #[must_use]
    pub fn shows_labels(self) -> bool {
        matches!(self, SidebarPresentation::Expanded(_))
    }
}

/// The four regions of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellRegions {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Whether the terminal is below the sidebar breakpoint
    #[must_use]
    pub fn is_narrow(viewport_width: u16, ui: &UiConfig) -> bool {
        viewport_width < ui.narrow_breakpoint
    }

    /// Sidebar presentation for the given state and terminal width.
    ///
    /// Below the breakpoint the sidebar is hidden whatever `is_open` says; the
    /// state itself is left alone.
    #[must_use]
    pub fn sidebar_presentation(is_open: bool, viewport_width: u16, ui: &UiConfig) -> SidebarPresentation {
        if Self::is_narrow(viewport_width, ui) {
            SidebarPresentation::Hidden
        } else if is_open {
            SidebarPresentation::Expanded(ui.sidebar_width)
        } else {
            SidebarPresentation::Collapsed(ui.collapsed_sidebar_width)
        }
    }

    /// Split the screen into header, sidebar, content and footer
    #[must_use]
    pub fn shell_layout(area: Rect, sidebar: SidebarPresentation) -> ShellRegions {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let body = rows[1];
        let (sidebar_area, content) = if sidebar.is_visible() {
            let width = sidebar.width().min(body.width);
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(width), Constraint::Min(0)])
                .split(body);
            (Some(columns[0]), columns[1])
        } else {
            (None, body)
        };

        ShellRegions {
            header: rows[0],
            sidebar: sidebar_area,
            content,
            footer: rows[2],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Whether a terminal cell lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
