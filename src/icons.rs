//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting emoji, Unicode, and ASCII fallbacks.

use crate::pages::PageKind;
use crate::state::Theme;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Page icons shown in the sidebar
#[derive(Debug, Clone)]
pub struct PageIcons {
    pub dashboard: &'static str,
    pub scans: &'static str,
    pub reports: &'static str,
    pub repairs: &'static str,
    pub settings: &'static str,
    pub profiles: &'static str,
    pub conflicts: &'static str,
    pub help: &'static str,
}

/// Header control icons
#[derive(Debug, Clone)]
pub struct ControlIcons {
    pub menu: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub not_found: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub pages: PageIcons,
    pub controls: ControlIcons,
}

/// Icon service providing icons for the configured theme
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            pages: PageIcons {
                dashboard: "📊",
                scans: "🔍",
                reports: "📄",
                repairs: "🔧",
                settings: "🛠",
                profiles: "👤",
                conflicts: "🚧",
                help: "❓",
            },
            controls: ControlIcons {
                menu: "☰",
                light: "🌞",
                dark: "🌙",
                not_found: "🚫",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            pages: PageIcons {
                dashboard: "◆",
                scans: "⌕",
                reports: "▤",
                repairs: "✚",
                settings: "⚙",
                profiles: "☺",
                conflicts: "⚠",
                help: "?",
            },
            controls: ControlIcons {
                menu: "≡",
                light: "☀",
                dark: "☾",
                not_found: "✗",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            pages: PageIcons {
                dashboard: "D",
                scans: "S",
                reports: "R",
                repairs: "F",
                settings: "*",
                profiles: "P",
                conflicts: "!",
                help: "?",
            },
            controls: ControlIcons {
                menu: "=",
                light: "*",
                dark: ")",
                not_found: "X",
            },
        }
    }

    /// Icon for a registered page
    #[must_use]
    pub fn page(&self, kind: PageKind) -> &'static str {
        let pages = self.icons().pages;
        match kind {
            PageKind::Dashboard => pages.dashboard,
            PageKind::Scans => pages.scans,
            PageKind::Reports => pages.reports,
            PageKind::Repairs => pages.repairs,
            PageKind::Settings => pages.settings,
            PageKind::Profiles => pages.profiles,
            PageKind::Conflicts => pages.conflicts,
            PageKind::Help => pages.help,
        }
    }

    #[must_use]
    pub fn menu(&self) -> &'static str {
        self.icons().controls.menu
    }

    /// Theme button glyph: a sun while light, a moon while dark
    #[must_use]
    pub fn theme_button(&self, theme: Theme) -> &'static str {
        let controls = self.icons().controls;
        match theme {
            Theme::Light => controls.light,
            Theme::Dark => controls.dark,
        }
    }

    #[must_use]
    pub fn not_found(&self) -> &'static str {
        self.icons().controls.not_found
    }
}
