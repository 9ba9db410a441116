//! Route registration and navigation.
//!
//! [`RouteTable`] is the static `path -> page` table built once from
//! configuration at startup. [`Router`] owns the current path and history.
//! Lookups are exact: a path that is not registered mounts the not-found page.

use crate::constants::HOME_PATH;
use crate::pages::{NotFoundPage, PageKind, PageUnit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// One `[[routes]]` entry in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub path: String,
    pub label: String,
    pub page: PageKind,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, label: impl Into<String>, page: PageKind) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            page,
        }
    }
}

/// Registered routes in sidebar order.
#[must_use]
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "Dashboard", PageKind::Dashboard),
        RouteConfig::new("/scans", "Scans", PageKind::Scans),
        RouteConfig::new("/reports", "Reports", PageKind::Reports),
        RouteConfig::new("/repairs", "Repairs", PageKind::Repairs),
        RouteConfig::new("/settings", "Settings", PageKind::Settings),
        RouteConfig::new("/profiles", "Profiles", PageKind::Profiles),
        RouteConfig::new("/conflicts", "Conflicts", PageKind::Conflicts),
        RouteConfig::new("/help", "Help", PageKind::Help),
    ]
}

/// Route registration errors, reported at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no routes are registered")]
    Empty,

    #[error("route '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    #[error("route '{path}' is registered twice (as '{first}' and '{second}')")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("route '{0}' has an empty label")]
    EmptyLabel(String),
}

/// A validated route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub label: String,
    pub page: PageKind,
}

/// Static dispatch table from path to page.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validate and build the table. Order is preserved.
    pub fn new(configs: &[RouteConfig]) -> Result<Self, RouteError> {
        if configs.is_empty() {
            return Err(RouteError::Empty);
        }

        let mut seen: HashMap<&str, &str> = HashMap::new();
        let mut routes = Vec::with_capacity(configs.len());

        for config in configs {
            if !config.path.starts_with('/') {
                return Err(RouteError::MissingLeadingSlash(config.path.clone()));
            }
            if config.label.trim().is_empty() {
                return Err(RouteError::EmptyLabel(config.path.clone()));
            }
            if let Some(first) = seen.insert(&config.path, &config.label) {
                return Err(RouteError::DuplicatePath {
                    path: config.path.clone(),
                    first: first.to_string(),
                    second: config.label.clone(),
                });
            }

            routes.push(Route {
                path: config.path.clone(),
                label: config.label.clone(),
                page: config.page,
            });
        }

        log::debug!("route table built with {} routes", routes.len());
        Ok(Self { routes })
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Index of a registered path in registration order.
    #[must_use]
    pub fn position(&self, path: &str) -> Option<usize> {
        self.routes.iter().position(|route| route.path == path)
    }

    /// Build a fresh page unit for `path`; unregistered paths get the not-found page.
    #[must_use]
    pub fn mount(&self, path: &str) -> Box<dyn PageUnit> {
        match self.resolve(path) {
            Some(route) => route.page.build(),
            None => {
                log::warn!("no route registered for '{}'", path);
                Box::new(NotFoundPage::new(path))
            }
        }
    }
}

/// Current path plus back-navigation history.
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    history: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}

impl Router {
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            current: start_path.into(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Request navigation. Returns `false` when already on `path`.
    pub fn navigate(&mut self, path: &str) -> bool {
        if self.current == path {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, path.to_string());
        log::info!("navigate {} -> {}", previous, path);
        self.history.push(previous);
        true
    }

    /// Return to the previous path. Returns `false` when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                log::info!("navigate back {} -> {}", self.current, previous);
                self.current = previous;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
