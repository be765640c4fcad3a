use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Title used when the document does not provide one.
pub const DEFAULT_TITLE: &str = "Project Timeline";

/// The top-level `project:` block of a schedule document.
///
/// Only `title` is interpreted. Any other keys the author adds (sponsor,
/// department, version, ...) are carried along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ProjectInfo {
    /// Title to display, falling back to the built-in default.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Derive an output file stem from a chart title: "My Project" → "my_project".
pub fn title_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}
