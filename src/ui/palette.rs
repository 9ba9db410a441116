//! Color palettes for the light and dark themes.

use crate::presentation::RootClassList;
use crate::state::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by every region of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub primary: Color,
    pub secondary: Color,
    pub border: Color,
    pub selection: Color,
    pub warning: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 247),
            surface: Color::Rgb(255, 255, 255),
            text_primary: Color::Rgb(29, 29, 31),
            text_secondary: Color::Rgb(110, 110, 115),
            primary: Color::Rgb(0, 122, 255),
            secondary: Color::Rgb(0, 184, 148),
            border: Color::Rgb(210, 210, 215),
            selection: Color::Rgb(225, 236, 255),
            warning: Color::Rgb(199, 113, 0),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            surface: Color::Rgb(30, 30, 34),
            text_primary: Color::Rgb(240, 240, 245),
            text_secondary: Color::Rgb(160, 160, 170),
            primary: Color::Rgb(10, 132, 255),
            secondary: Color::Rgb(0, 206, 166),
            border: Color::Rgb(60, 60, 66),
            selection: Color::Rgb(40, 52, 74),
            warning: Color::Rgb(255, 159, 10),
        }
    }

    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Palette for whatever theme class the root surface carries.
    #[must_use]
    pub fn from_surface(surface: &RootClassList) -> Self {
        Self::for_theme(surface.active_theme().unwrap_or_default())
    }

    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    #[must_use]
    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.surface)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn heading(&self) -> Style {
        Style::default().fg(self.text_primary).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }
}
