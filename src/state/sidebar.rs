//! Sidebar visibility state.

use super::store::{Store, Subscription};

/// Whether the navigation sidebar is open. Starts open.
///
/// This is the user's choice only. A narrow terminal hides the sidebar at
/// render time without touching this value.
#[derive(Debug, Clone)]
pub struct SidebarState {
    store: Store<bool>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            store: Store::new("sidebar", true),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.store.get()
    }

    /// Open a collapsed sidebar or collapse an open one.
    pub fn toggle(&self) {
        self.store.toggle();
    }

    /// Listen for changes; the listener receives the new `is_open` value.
    #[must_use = "keep the Subscription to be able to unsubscribe"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(bool) + 'static,
    {
        self.store.subscribe(listener)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }
}
