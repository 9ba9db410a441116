//! Configuration management for Profile Doctor
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, HOME_PATH, MAIN_AREA_MIN_WIDTH, NARROW_BREAKPOINT_DEFAULT, SIDEBAR_COLLAPSED_DEFAULT_WIDTH,
    SIDEBAR_COLLAPSED_MAX_WIDTH, SIDEBAR_COLLAPSED_MIN_WIDTH, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH,
    SIDEBAR_MIN_WIDTH,
};
use crate::icons::IconTheme;
use crate::router::{default_routes, RouteConfig, RouteTable};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    /// Registered pages, in sidebar order
    pub routes: Vec<RouteConfig>,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Expanded sidebar width in columns
    pub sidebar_width: u16,
    /// Collapsed (icons only) sidebar width in columns
    pub collapsed_sidebar_width: u16,
    /// Terminals narrower than this hide the sidebar entirely
    pub narrow_breakpoint: u16,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Path opened on startup
    pub start_path: String,
    /// Icon set: "unicode", "emoji" or "ascii"
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file as well as the in-memory buffer
    pub enabled: bool,
    /// One of "off", "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            routes: default_routes(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            collapsed_sidebar_width: SIDEBAR_COLLAPSED_DEFAULT_WIDTH,
            narrow_breakpoint: NARROW_BREAKPOINT_DEFAULT,
            mouse_enabled: true,
            start_path: HOME_PATH.to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("profile-doctor.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("profile-doctor").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate UI settings
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if self.ui.collapsed_sidebar_width < SIDEBAR_COLLAPSED_MIN_WIDTH
            || self.ui.collapsed_sidebar_width > SIDEBAR_COLLAPSED_MAX_WIDTH
        {
            anyhow::bail!(
                "collapsed_sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_COLLAPSED_MIN_WIDTH,
                SIDEBAR_COLLAPSED_MAX_WIDTH,
                self.ui.collapsed_sidebar_width
            );
        }

        if self.ui.collapsed_sidebar_width >= self.ui.sidebar_width {
            anyhow::bail!(
                "collapsed_sidebar_width ({}) must be smaller than sidebar_width ({})",
                self.ui.collapsed_sidebar_width,
                self.ui.sidebar_width
            );
        }

        // An expanded sidebar must leave room for the content region
        if self.ui.narrow_breakpoint < self.ui.sidebar_width + MAIN_AREA_MIN_WIDTH {
            anyhow::bail!(
                "narrow_breakpoint ({}) must be at least sidebar_width + {} columns",
                self.ui.narrow_breakpoint,
                MAIN_AREA_MIN_WIDTH
            );
        }

        if !self.ui.start_path.starts_with('/') {
            anyhow::bail!("start_path must start with '/', got '{}'", self.ui.start_path);
        }

        self.logging.level_filter()?;

        // Validate the route table
        RouteTable::new(&self.routes).context("Invalid [[routes]] table")?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Profile Doctor Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("profile-doctor"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
