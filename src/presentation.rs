//! Root presentation surface and the theme synchronizer that writes to it.
//!
//! The terminal root carries a small class list, the same way a document root
//! carries CSS classes. [`PresentationSynchronizer`] is its only writer: it
//! keeps exactly one theme class on the surface, matching [`ThemeState`].
//! The renderer reads the classes to pick a palette.

use crate::state::{Subscription, Theme, ThemeState};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// A surface that can be classified.
pub trait RootSurface {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Class list of the terminal root frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootClassList {
    classes: Vec<String>,
    /// Every class added, in order
    history: Vec<String>,
}

impl RootClassList {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The theme whose class is currently applied, if any.
    #[must_use]
    pub fn active_theme(&self) -> Option<Theme> {
        Theme::ALL.into_iter().find(|theme| self.has_class(theme.class_name()))
    }
}

impl RootSurface for RootClassList {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self.history.push(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Writes theme classes to a surface, skipping redundant writes.
struct ThemeApplier<R> {
    surface: Rc<RefCell<R>>,
    applied: Rc<Cell<Option<Theme>>>,
}

impl<R> Clone for ThemeApplier<R> {
    fn clone(&self) -> Self {
        Self {
            surface: Rc::clone(&self.surface),
            applied: Rc::clone(&self.applied),
        }
    }
}

impl<R: RootSurface> ThemeApplier<R> {
    /// Returns `true` when the surface was written.
    fn apply(&self, theme: Theme) -> bool {
        let mut surface = self.surface.borrow_mut();
        if self.applied.get() == Some(theme) && surface.has_class(theme.class_name()) {
            return false;
        }

        for other in Theme::ALL {
            surface.remove_class(other.class_name());
        }
        surface.add_class(theme.class_name());
        self.applied.set(Some(theme));

        log::debug!("root surface classified as '{}'", theme.class_name());
        true
    }
}

/// Keeps the root surface's theme class in step with [`ThemeState`].
///
/// Install it once at startup and keep it for the lifetime of the process.
pub struct PresentationSynchronizer {
    applied: Rc<Cell<Option<Theme>>>,
    subscription: Subscription,
}

impl PresentationSynchronizer {
    /// Apply the current theme now and on every later theme toggle.
    pub fn install<R>(theme: &ThemeState, surface: Rc<RefCell<R>>) -> Self
    where
        R: RootSurface + 'static,
    {
        let applier = ThemeApplier {
            surface,
            applied: Rc::new(Cell::new(None)),
        };
        applier.apply(theme.theme());

        let applied = Rc::clone(&applier.applied);
        let subscription = theme.subscribe(move |next| {
            applier.apply(next);
        });

        log::info!("presentation synchronizer installed");
        Self { applied, subscription }
    }

    /// Theme last written to the surface.
    #[must_use]
    pub fn applied_theme(&self) -> Option<Theme> {
        self.applied.get()
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.subscription.is_active()
    }
}

impl fmt::Debug for PresentationSynchronizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationSynchronizer")
            .field("applied", &self.applied.get())
            .field("installed", &self.is_installed())
            .finish()
    }
}
