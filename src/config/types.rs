//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// User configuration, read from `~/.colima-bar/config.json`.
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults in [`super::defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Login shell used to run every external command
    #[serde(default = "default_shell")]
    pub shell: String,
    /// Instance manager CLI (default: "colima")
    #[serde(default = "default_colima_command")]
    pub colima_command: String,
    /// Container engine CLI (default: "docker")
    #[serde(default = "default_docker_command")]
    pub docker_command: String,
    /// Docker context name of the default instance, also the prefix of all others
    #[serde(default = "default_context_base")]
    pub context_base: String,
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,
    #[serde(default = "default_switching_title")]
    pub switching_title: String,
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}
fn default_colima_command() -> String {
    DEFAULT_COLIMA_COMMAND.to_string()
}
fn default_docker_command() -> String {
    DEFAULT_DOCKER_COMMAND.to_string()
}
fn default_context_base() -> String {
    DEFAULT_CONTEXT_BASE.to_string()
}
fn default_placeholder_title() -> String {
    DEFAULT_PLACEHOLDER_TITLE.to_string()
}
fn default_switching_title() -> String {
    DEFAULT_SWITCHING_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            shell: default_shell(),
            colima_command: default_colima_command(),
            docker_command: default_docker_command(),
            context_base: default_context_base(),
            placeholder_title: default_placeholder_title(),
            switching_title: default_switching_title(),
        }
    }
}

// ============================================
// COMMAND LINES
// ============================================

impl Config {
    /// `colima list --json`
    pub fn list_command(&self) -> String {
        format!("{} list --json", self.colima_command)
    }

    /// `colima stop -p <name>`
    pub fn stop_command(&self, instance: &str) -> String {
        format!("{} stop -p {}", self.colima_command, instance)
    }

    /// `colima start -p <name>`
    pub fn start_command(&self, instance: &str) -> String {
        format!("{} start -p {}", self.colima_command, instance)
    }

    /// Lists docker contexts and keeps only the active line of our family.
    pub fn context_list_command(&self) -> String {
        format!(
            "{} context ls | grep '*' | grep {}",
            self.docker_command, self.context_base
        )
    }

    /// `docker context use <context>`
    pub fn context_use_command(&self, context: &str) -> String {
        format!("{} context use {}", self.docker_command, context)
    }
}
