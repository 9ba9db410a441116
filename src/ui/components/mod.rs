//! Regions of the shell

pub mod footer;
pub mod header;
pub mod logs_overlay;
pub mod sidebar;

pub use footer::FooterComponent;
pub use header::HeaderComponent;
pub use logs_overlay::LogsOverlay;
pub use sidebar::{SidebarComponent, SidebarEntry};
