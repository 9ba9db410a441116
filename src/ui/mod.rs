//! UI module for Profile Doctor
//!
//! This module handles the layout shell, its regions, rendering, and user interaction.

pub mod components;
pub mod core;
pub mod layout;
pub mod palette;
pub mod renderer;
pub mod shell;

pub use layout::{LayoutManager, ShellRegions, SidebarPresentation};
pub use palette::Palette;
pub use renderer::run_app;
pub use shell::ShellComposer;
