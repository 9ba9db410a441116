//! Process-wide UI state.
//!
//! Two independent stores live here: [`SidebarState`] (is the navigation
//! sidebar open) and [`ThemeState`] (light or dark). Both are created once in
//! [`crate::ui::core::AppContext`] and handed out by handle; nothing in the
//! crate keeps them in a global.
//!
//! Neither store has a setter. The only mutation is `toggle()`.

pub mod sidebar;
pub mod store;
pub mod theme;

pub use sidebar::SidebarState;
pub use store::{Store, Subscription, Toggle};
pub use theme::{Theme, ThemeState};
