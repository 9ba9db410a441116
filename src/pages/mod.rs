//! Page units mounted into the shell's content region.
//!
//! Pages are passive: they get an area and a palette to draw with, and never
//! see the sidebar or theme stores. All data they show is static.

pub mod dashboard;
pub mod help;
pub mod not_found;
pub mod placeholder;

pub use dashboard::DashboardPage;
pub use help::HelpPage;
pub use not_found::NotFoundPage;
pub use placeholder::PlaceholderPage;

use crate::ui::core::actions::Action;
use crate::ui::palette::Palette;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A renderable page.
pub trait PageUnit {
    /// Registered kind, `None` for the not-found page.
    fn kind(&self) -> Option<PageKind>;

    fn title(&self) -> &str;

    /// Page-local key handling (tabs and the like).
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette);
}

impl fmt::Debug for dyn PageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageUnit")
            .field("kind", &self.kind())
            .field("title", &self.title())
            .finish()
    }
}

type PageFactory = fn() -> Box<dyn PageUnit>;

/// Every page that can be registered on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Dashboard,
    Scans,
    Reports,
    Repairs,
    Settings,
    Profiles,
    Conflicts,
    Help,
}

impl PageKind {
    pub const ALL: [PageKind; 8] = [
        PageKind::Dashboard,
        PageKind::Scans,
        PageKind::Reports,
        PageKind::Repairs,
        PageKind::Settings,
        PageKind::Profiles,
        PageKind::Conflicts,
        PageKind::Help,
    ];

    fn factory(self) -> PageFactory {
        match self {
            PageKind::Dashboard => || -> Box<dyn PageUnit> { Box::new(DashboardPage::new()) },
            PageKind::Scans => || -> Box<dyn PageUnit> { Box::new(PlaceholderPage::scans()) },
            PageKind::Reports => || -> Box<dyn PageUnit> { Box::new(PlaceholderPage::reports()) },
            PageKind::Repairs => || -> Box<dyn PageUnit> { Box::new(PlaceholderPage::repairs()) },
            PageKind::Settings => || -> Box<dyn PageUnit> { Box::new(PlaceholderPage::settings()) },
            PageKind::Profiles => || -> Box<dyn PageUnit> { Box::new(PlaceholderPage::profiles()) },
            PageKind::Conflicts => || -> Box<dyn PageUnit> { Box::new(PlaceholderPage::conflicts()) },
            PageKind::Help => || -> Box<dyn PageUnit> { Box::new(HelpPage::new()) },
        }
    }

    /// Construct a new unit of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn PageUnit> {
        (self.factory())()
    }
}
