//! Error taxonomy for the load → normalize → render → export pipeline.
//!
//! One `thiserror` enum covers every stage. `NotFound` is the only
//! user-correctable class and carries a remediation hint; `Parse` and `Csv`
//! are transparent over their underlying parser errors; the remaining
//! variants wrap a stage-specific message. See SPEC §7.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure the pipeline can surface, caught at a single boundary.
#[derive(Debug, Error)]
pub enum ChartError {
    /// No schedule document at any probed candidate path.
    #[error("no schedule document found; looked for {}", format_candidates(.candidates))]
    NotFound { candidates: Vec<PathBuf> },

    /// YAML syntax error, surfaced with the parser's own diagnostic.
    #[error(transparent)]
    Parse(#[from] serde_yaml::Error),

    /// CSV decoding error, surfaced with the reader's own diagnostic.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A required task field was missing or ill-typed at the render boundary.
    #[error("{0}")]
    Validation(String),

    /// The rendering collaborator rejected the input.
    #[error("{0}")]
    Render(String),

    /// The export collaborator could not write the output.
    #[error("{0}")]
    Export(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// A user-facing remediation hint, if the error is correctable. Only
    /// `NotFound` offers one: copy the shipped template to the private path.
    pub fn remediation(&self) -> Option<String> {
        match self {
            ChartError::NotFound { .. } => Some(
                "Please ensure you have created a data file:\n  \
                 cp data/gantt_template.yaml data/gantt_data.yaml\n  \
                 # Then edit data/gantt_data.yaml with your project data"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

/// Render the probed candidate paths as a comma-separated list for the
/// `NotFound` message.
fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
