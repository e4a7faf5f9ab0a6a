//! Configuration module - command names and menu bar titles
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.colima-bar/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - The `Config` struct
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_CONFIG_PATH, DEFAULT_PLACEHOLDER_TITLE, DEFAULT_SWITCHING_TITLE};

pub use types::Config;

pub use loader::{load_config, load_config_from};

#[cfg(test)]
pub use defaults::{
    DEFAULT_COLIMA_COMMAND, DEFAULT_CONTEXT_BASE, DEFAULT_DOCKER_COMMAND, DEFAULT_SHELL,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
