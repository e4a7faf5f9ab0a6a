//! colima instance listing
//!
//! `colima list --json` prints one JSON object per line. The whole output is
//! treated as one snapshot: if the command fails or any line is not a valid
//! instance record, the listing is empty.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ResultExt;
use crate::runner::CommandRunner;

/// One colima profile as reported by `colima list --json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
    pub status: String,
    pub arch: String,
}

impl Instance {
    /// Menu label: `name<TAB>arch<TAB><TAB>status`
    pub fn menu_label(&self) -> String {
        format!("{}\t{}\t\t{}", self.name, self.arch, self.status)
    }
}

/// Decode line-delimited JSON into instances, in input order.
///
/// Empty lines are skipped. The first undecodable line fails the batch.
pub fn parse_instances(output: &str) -> serde_json::Result<Vec<Instance>> {
    output
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<Instance>(line))
        .collect()
}

/// Run the listing command and decode its output.
///
/// Never fails: command errors and decode errors both yield an empty list.
pub fn list_instances<R: CommandRunner + ?Sized>(runner: &R, config: &Config) -> Vec<Instance> {
    let Some(output) = runner.run(&config.list_command()).warn_on_err() else {
        return Vec::new();
    };

    match parse_instances(&output) {
        Ok(instances) => {
            debug!(count = instances.len(), "Listed instances");
            instances
        }
        Err(e) => {
            warn!(error = %e, "Discarding instance listing with undecodable line");
            Vec::new()
        }
    }
}
