//! Profile Doctor - a terminal dashboard for diagnosing user profiles
//!
//! This library provides the application shell of Profile Doctor: a header,
//! a collapsible sidebar, a routed content region and a footer, plus the two
//! pieces of global UI state (sidebar visibility and the color theme) that
//! drive them. It is built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`state`] - Observable sidebar and theme stores
//! * [`presentation`] - Applies the theme to the root drawing surface
//! * [`router`] - Path to page unit mapping and navigation history
//! * [`pages`] - Page units mounted in the content region
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Page units that can be mounted in the content region
pub mod pages;

/// Theme synchronization with the root drawing surface
pub mod presentation;

/// Route table and navigation history
pub mod router;

/// Global UI state stores
pub mod state;

/// Terminal user interface components and rendering
pub mod ui;
