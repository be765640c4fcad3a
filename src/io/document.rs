//! Schedule document loading and normalization.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ChartError;
use crate::model::{DocumentConfig, ProjectInfo, TaskRecord, TaskRow};

/// Private data file, probed first.
pub const PRIVATE_DATA_PATH: &str = "data/gantt_data.yaml";
/// Shipped template, probed second.
pub const TEMPLATE_PATH: &str = "data/gantt_template.yaml";

/// A parsed schedule document. Absent top-level keys default to empty; no
/// schema validation happens at this level.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleDocument {
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default)]
    pub config: DocumentConfig,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

/// Pick the document to load: an explicit path is used verbatim, otherwise
/// the first existing candidate under `base_dir` wins.
pub fn resolve_document_source(
    explicit: Option<&Path>,
    base_dir: &Path,
) -> Result<PathBuf, ChartError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let candidates = [base_dir.join(PRIVATE_DATA_PATH), base_dir.join(TEMPLATE_PATH)];
    for candidate in &candidates {
        if candidate.exists() {
            debug!(path = %candidate.display(), "resolved schedule document");
            return Ok(candidate.clone());
        }
    }

    Err(ChartError::NotFound {
        candidates: candidates.to_vec(),
    })
}

/// Parse the YAML document at `path`. Syntax errors surface as the parser's
/// own diagnostic, unmodified.
pub fn load_document(path: &Path) -> Result<ScheduleDocument, ChartError> {
    let text = std::fs::read_to_string(path)?;
    let document: ScheduleDocument = serde_yaml::from_str(&text)?;
    Ok(document)
}

/// Materialize the ordered task table.
///
/// Defaults apply per field and the document's task order is kept as-is: no
/// sorting, no filtering, no deduplication.
pub fn normalize(records: &[TaskRecord]) -> Vec<TaskRow> {
    records.iter().cloned().map(TaskRow::from).collect()
}
