//! Project report configuration.

use serde::{Deserialize, Serialize};

/// Toggles for the optional sections of the project report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the tags found in each file. Default: false.
    pub scan_tags: Option<bool>,
    /// Print the task list per phase as prompt context. Default: false.
    pub generate_prompt: Option<bool>,
}

impl ReportConfig {
    pub fn effective_scan_tags(&self) -> bool {
        self.scan_tags.unwrap_or(false)
    }

    pub fn effective_generate_prompt(&self) -> bool {
        self.generate_prompt.unwrap_or(false)
    }
}
