//! Color theme state.

use super::store::{Store, Subscription, Toggle};
use std::fmt;

/// Color theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Classification applied to the root surface for this theme.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Toggle for Theme {
    fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// The active color theme. Starts light.
#[derive(Debug, Clone)]
pub struct ThemeState {
    store: Store<Theme>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            store: Store::new("theme", Theme::Light),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.store.get()
    }

    /// Switch light to dark or dark to light.
    pub fn toggle(&self) {
        self.store.toggle();
    }

    #[must_use = "keep the Subscription to be able to unsubscribe"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Theme) + 'static,
    {
        self.store.subscribe(listener)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }
}
