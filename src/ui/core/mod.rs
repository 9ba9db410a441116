//! Core UI functionality for Profile Doctor.
//!
//! This module contains the building blocks the shell is assembled from.
//!
//! # Module Components
//!
//! - [`actions`] - Actions components hand to the shell
//! - [`component`] - Base component trait and rendering abstraction
//! - [`context`] - Process-wide state shared with the shell
//! - [`event_handler`] - Terminal event polling

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
