//! Default configuration values
//!
//! The defaults reproduce the fixed commands the menu bar app was built around.

/// Login shell every external command runs through (`<shell> -l -c <cmd>`)
pub const DEFAULT_SHELL: &str = "/bin/zsh";

/// Instance manager CLI
pub const DEFAULT_COLIMA_COMMAND: &str = "colima";

/// Container engine CLI used for context listing and switching
pub const DEFAULT_DOCKER_COMMAND: &str = "docker";

/// Docker context name of the `default` instance; other instances use `<base>-<name>`
pub const DEFAULT_CONTEXT_BASE: &str = "colima";

/// Title shown before an active instance is known
pub const DEFAULT_PLACEHOLDER_TITLE: &str = "(~)";

/// Title shown while a switch is in flight
pub const DEFAULT_SWITCHING_TITLE: &str = "...";

/// Config file location, tilde-expanded at load time
pub const DEFAULT_CONFIG_PATH: &str = "~/.colima-bar/config.json";
