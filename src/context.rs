//! Docker context detection and naming
//!
//! colima registers one docker context per instance: `colima` for the
//! `default` instance and `colima-<name>` for the others. The active one is
//! read back from `docker context ls` text output.

use regex::Regex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ResultExt;
use crate::instances::Instance;
use crate::runner::CommandRunner;

/// Instance name that maps to the unsuffixed context
pub const DEFAULT_INSTANCE: &str = "default";

/// Docker context name for an instance.
pub fn context_name_for(base: &str, instance: &str) -> String {
    if instance == DEFAULT_INSTANCE {
        base.to_string()
    } else {
        format!("{}-{}", base, instance)
    }
}

/// Extract the instance name from the active `docker context ls` line(s).
///
/// Returns `None` for empty text. Text that doesn't look like
/// `<base>[-name]<whitespace>...` is passed through (minus surrounding
/// newlines) and will not match any instance name.
pub fn extract_instance_name(text: &str, base: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let pattern = format!(r"^{}-*(\w*)\s.*\n?$", regex::escape(base));
    let re = Regex::new(&pattern).log_err()?;

    let replaced = re.replace(text, "$1");
    let name = replaced.trim_matches(|c: char| c == '\n' || c == '\r');
    if name.is_empty() {
        Some(DEFAULT_INSTANCE.to_string())
    } else {
        Some(name.to_string())
    }
}

/// Find the listed instance whose docker context is currently active.
///
/// Command failure, empty output and unknown names all yield `None`.
pub fn detect_active_context<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &Config,
    instances: &[Instance],
) -> Option<Instance> {
    let text = runner.run(&config.context_list_command()).warn_on_err()?;
    let name = extract_instance_name(&text, &config.context_base)?;

    let found = instances.iter().find(|instance| instance.name == name).cloned();
    match &found {
        Some(instance) => debug!(instance = %instance.name, "Detected active context"),
        None => warn!(name = %name, "Active context does not match a listed instance"),
    }
    found
}
