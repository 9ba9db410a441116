//! Dashboard page: health overview, conflict viewer, repair actions, and the
//! logs/reports tabs. Every figure here is mock data.

use super::{PageKind, PageUnit};
use crate::ui::core::actions::Action;
use crate::ui::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Row, Table, Tabs},
    Frame,
};

/// Health overview cards: (title, value, caption)
pub const HEALTH_METRICS: [(&str, &str, &str); 3] = [
    ("Conflicts Detected", "42", "in the last 7 days"),
    ("Repairs Made", "34", "automatically"),
    ("System Health", "99%", "Excellent"),
];

/// Conflict viewer rows: (file, conflict type, date, status)
pub const CONFLICT_ROWS: [[&str; 4]; 2] = [
    ["preferences.json", "Duplicate Key", "2025-10-31", "Resolved"],
    ["settings.xml", "Invalid Value", "2025-10-30", "Pending"],
];

pub const LOG_LINES: [&str; 3] = [
    "[INFO] Scan started at 2025-10-31 17:15:00",
    "[WARN] Duplicate key found in preferences.json",
    "[INFO] Repair applied successfully",
];

/// Bar chart data: (scan, conflicts, repairs)
pub const SCAN_RESULTS: [(&str, u64, u64); 5] = [
    ("Scan A", 12, 8),
    ("Scan B", 19, 16),
    ("Scan C", 3, 3),
    ("Scan D", 27, 20),
    ("Scan E", 23, 18),
];

/// Tabs in the "Logs & Reports" section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Logs,
    Reports,
}

impl DashboardTab {
    pub const TITLES: [&'static str; 2] = ["Real-time Logs", "Scan Reports"];

    fn index(self) -> usize {
        match self {
            DashboardTab::Logs => 0,
            DashboardTab::Reports => 1,
        }
    }

    fn next(self) -> Self {
        match self {
            DashboardTab::Logs => DashboardTab::Reports,
            DashboardTab::Reports => DashboardTab::Logs,
        }
    }
}

#[derive(Debug, Default)]
pub struct DashboardPage {
    tab: DashboardTab,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    fn section_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(title, palette.heading()))
            .border_style(palette.border_style())
            .style(palette.surface_style())
    }

    fn render_health_overview(f: &mut Frame, area: Rect, palette: &Palette) {
        let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

        for (index, (title, value, caption)) in HEALTH_METRICS.iter().enumerate() {
            // Health is the one figure shown in the secondary color
            let value_style = if index == 2 {
                Style::default().fg(palette.secondary)
            } else {
                palette.heading()
            };
            let card = Paragraph::new(vec![
                Line::from(Span::styled(*value, value_style)),
                Line::from(Span::styled(*caption, palette.muted())),
            ])
            .block(Self::section_block(title, palette));
            f.render_widget(card, cards[index]);
        }
    }

    fn render_conflict_viewer(f: &mut Frame, area: Rect, palette: &Palette) {
        let header = Row::new(vec!["File", "Conflict Type", "Date", "Status"]).style(palette.heading());
        let rows = CONFLICT_ROWS.iter().map(|row| {
            let status_style = if row[3] == "Pending" {
                Style::default().fg(palette.warning)
            } else {
                Style::default().fg(palette.secondary)
            };
            Row::new(vec![
                Span::raw(row[0]),
                Span::raw(row[1]),
                Span::styled(row[2], palette.muted()),
                Span::styled(row[3], status_style),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ],
        )
        .header(header)
        .block(Self::section_block("Conflict Viewer", palette));

        f.render_widget(table, area);
    }

    fn render_repair_actions(f: &mut Frame, area: Rect, palette: &Palette) {
        let line = Line::from(vec![
            Span::styled("Recommended action for pending conflicts.  ", palette.muted()),
            Span::styled("[ One-Click Fix ]", palette.accent()),
        ]);
        f.render_widget(
            Paragraph::new(line).block(Self::section_block("Repair Actions", palette)),
            area,
        );
    }

    fn render_logs_and_reports(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let block = Self::section_block("Logs & Reports", palette);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [tabs_area, body_area] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let tabs = Tabs::new(DashboardTab::TITLES)
            .select(self.tab.index())
            .style(palette.muted())
            .highlight_style(palette.accent());
        f.render_widget(tabs, tabs_area);

        match self.tab {
            DashboardTab::Logs => {
                let lines: Vec<Line> = LOG_LINES.iter().map(|l| Line::from(*l)).collect();
                f.render_widget(Paragraph::new(lines).style(palette.surface_style()), body_area);
            }
            DashboardTab::Reports => {
                let mut chart = BarChart::default()
                    .bar_width(3)
                    .bar_gap(1)
                    .group_gap(3)
                    .style(palette.surface_style());
                for (name, conflicts, repairs) in SCAN_RESULTS {
                    let group = BarGroup::default().label(Line::from(name)).bars(&[
                        Bar::default()
                            .value(conflicts)
                            .style(Style::default().fg(palette.primary)),
                        Bar::default()
                            .value(repairs)
                            .style(Style::default().fg(palette.secondary)),
                    ]);
                    chart = chart.data(group);
                }
                f.render_widget(chart, body_area);
            }
        }
    }
}

impl PageUnit for DashboardPage {
    fn kind(&self) -> Option<PageKind> {
        Some(PageKind::Dashboard)
    }

    fn title(&self) -> &str {
        "Dashboard"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Tab {
            self.tab = self.tab.next();
            log::debug!("dashboard tab switched to {:?}", self.tab);
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let [title_area, overview_area, viewer_area, actions_area, tabs_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .areas(area);

        f.render_widget(
            Paragraph::new(Span::styled(self.title(), palette.accent())),
            title_area,
        );
        Self::render_health_overview(f, overview_area, palette);
        Self::render_conflict_viewer(f, viewer_area, palette);
        Self::render_repair_actions(f, actions_area, palette);
        self.render_logs_and_reports(f, tabs_area, palette);
    }
}
