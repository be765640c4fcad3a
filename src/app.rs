//! The load → normalize → render → export pipeline.
//!
//! Everything runs to completion in sequence; the first failure aborts the
//! run and bubbles to the entry point untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::ChartError;
use crate::io::{csv_import, document};
use crate::model::project::title_slug;
use crate::model::{ChartConfig, ConfigOverrides};
use crate::render::export;
use crate::render::{ExportFormat, GroupBy, ThemeCapability, TimelineFigure};

/// Everything the entry point resolved from its arguments.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Explicit schedule path; `None` probes the default candidates.
    pub input: Option<PathBuf>,
    /// Output file stem; `None` derives it from the chart title.
    pub output: Option<String>,
    pub output_dir: PathBuf,
    pub format: ExportFormat,
    pub scale: u32,
    /// Title override; beats the document's `project.title`.
    pub title: Option<String>,
    pub config: ConfigOverrides,
    pub group_by: GroupBy,
    pub show: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            output_dir: PathBuf::from("output"),
            format: ExportFormat::default(),
            scale: 3,
            title: None,
            config: ConfigOverrides::default(),
            group_by: GroupBy::default(),
            show: false,
        }
    }
}

/// Run the whole pipeline and return the path of the written chart.
pub fn run(options: &RunOptions) -> Result<PathBuf, ChartError> {
    let base_dir = std::env::current_dir()?;
    let source = document::resolve_document_source(options.input.as_deref(), &base_dir)?;
    info!(path = %source.display(), "loading schedule");

    let schedule = if is_csv(&source) {
        csv_import::import_csv(&source)?
    } else {
        document::load_document(&source)?
    };

    let rows = document::normalize(&schedule.tasks);
    debug!(tasks = rows.len(), "normalized task table");

    let config = ChartConfig::resolve(&schedule.config, &options.config);
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| schedule.project.display_title().to_string());

    let theme = ThemeCapability::detect();
    if !theme.available {
        warn!("decorative theming is unavailable in this build; using fallback styling");
    }

    info!(palette = %config.palette, tasks = rows.len(), "building chart");
    let figure = TimelineFigure::build(&title, rows, &config, options.group_by, theme)?;

    let base_name = options.output.clone().unwrap_or_else(|| title_slug(&title));
    debug!(
        dir = %options.output_dir.display(),
        file = %base_name,
        format = ?options.format,
        "exporting chart"
    );
    let path = export::write(&figure, &options.output_dir, &base_name, options.format, options.scale)?;

    if options.show {
        debug!(path = %path.display(), "opening exported chart");
        // Fire and forget; a missing viewer shouldn't fail the run.
        if let Err(e) = open::that(&path) {
            warn!("could not open viewer: {e}");
        }
    }

    Ok(path)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_inputs_are_detected_by_extension() {
        assert!(is_csv(Path::new("schedule.csv")));
        assert!(is_csv(Path::new("schedule.CSV")));
        assert!(!is_csv(Path::new("schedule.yaml")));
        assert!(!is_csv(Path::new("schedule")));
    }

    #[test]
    fn default_options_match_the_cli_defaults() {
        let options = RunOptions::default();
        assert_eq!(options.output_dir, PathBuf::from("output"));
        assert_eq!(options.format, ExportFormat::Html);
        assert_eq!(options.scale, 3);
        assert_eq!(options.group_by, GroupBy::Task);
        assert!(!options.show);
    }
}
