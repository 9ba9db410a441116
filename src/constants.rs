//! Constants used throughout the application
//!
//! This module centralizes UI text, layout sizes and other constant values.

// Branding
pub const APP_TITLE: &str = "Profile Doctor";
pub const FOOTER_COPYRIGHT: &str = "© 2025 Profile Doctor. All Rights Reserved.";
pub const FOOTER_LINKS: [&str; 2] = ["Privacy Policy", "Terms"];

// Header quick links (label, path)
pub const HEADER_LINKS: [(&str, &str); 3] = [("Dashboard", "/"), ("Scans", "/scans"), ("Reports", "/reports")];

// Dialogs
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const SIDEBAR_TITLE: &str = "Menu";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const HOME_PATH: &str = "/";
pub const HELP_PATH: &str = "/help";

// UI Layout Constants
/// Header height in rows (bordered, one line of content)
pub const HEADER_HEIGHT: u16 = 3;
/// Footer height in rows
pub const FOOTER_HEIGHT: u16 = 1;
/// Minimum expanded sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 12;
/// Maximum expanded sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default expanded sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Minimum collapsed (icons only) sidebar width in columns
pub const SIDEBAR_COLLAPSED_MIN_WIDTH: u16 = 3;
/// Maximum collapsed (icons only) sidebar width in columns
pub const SIDEBAR_COLLAPSED_MAX_WIDTH: u16 = 10;
/// Default collapsed (icons only) sidebar width in columns
pub const SIDEBAR_COLLAPSED_DEFAULT_WIDTH: u16 = 6;
/// Below this terminal width the sidebar is hidden whatever its state
pub const NARROW_BREAKPOINT_DEFAULT: u16 = 80;
/// Minimum content area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;

// Logging
/// Number of log lines kept in memory for the logs overlay
pub const LOG_BUFFER_CAPACITY: usize = 500;
pub const LOG_FILE_NAME: &str = "profile-doctor.log";
