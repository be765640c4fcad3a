//! CSV schedule ingestion.
//!
//! Sidecar input for schedules kept in spreadsheets. The delimiter is
//! auto-detected and headers are matched loosely ("Task Name", "start_date",
//! "Assigned To", ...). Rows become the same lenient records the YAML path
//! produces, so required-field validation still happens at the rendering
//! boundary.

use std::path::Path;

use tracing::warn;

use crate::error::ChartError;
use crate::io::document::ScheduleDocument;
use crate::model::task::{parse_date, TaskRecord};

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Map a normalized header to our column index:
///   0 = name, 1 = start, 2 = finish, 3 = resource, 4 = phase,
///   5 = description, 6 = dependencies
fn header_to_col(normalized: &str) -> Option<usize> {
    match normalized {
        "name" | "task" | "taskname" | "tasklabel" | "label" | "title" | "activity" => Some(0),

        "start" | "startdate" | "from" | "begin" | "begindate" => Some(1),

        "finish" | "finishdate" | "end" | "enddate" | "to" | "due" | "duedate" => Some(2),

        "resource" | "assignee" | "assignedto" | "owner" | "who" => Some(3),

        "phase" | "group" | "stage" | "category" => Some(4),

        "description" | "notes" | "note" | "details" | "comment" | "comments" => Some(5),

        "dependencies" | "dependson" | "deps" | "predecessors" => Some(6),

        _ => None,
    }
}

/// Import a schedule from a CSV file.
///
/// Only a task name column is required up front; missing dates on individual
/// rows load as `None` exactly like incomplete YAML entries. Rows the CSV
/// reader cannot decode are skipped with a warning.
pub fn import_csv(path: &Path) -> Result<ScheduleDocument, ChartError> {
    // Read the whole file to detect the delimiter from the first line.
    let content = std::fs::read_to_string(path)?;
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<usize>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    if !col_map.iter().any(|c| *c == Some(0)) {
        let found: Vec<&str> = headers.iter().collect();
        return Err(ChartError::Validation(format!(
            "CSV has no task name column. Found headers: {found:?}"
        )));
    }

    let mut tasks: Vec<TaskRecord> = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping CSV row {}: {}", i + 2, e);
                continue;
            }
        };

        let mut task = TaskRecord::default();
        for (col_idx, field) in record.iter().enumerate() {
            let Some(mapped) = col_map.get(col_idx).copied().flatten() else {
                continue;
            };
            if field.is_empty() {
                continue;
            }
            match mapped {
                0 => task.name = Some(field.to_string()),
                1 => task.start = parse_date(field),
                2 => task.finish = parse_date(field),
                3 => task.resource = Some(field.to_string()),
                4 => task.phase = Some(field.to_string()),
                5 => task.description = Some(field.to_string()),
                6 => {
                    task.dependencies = field
                        .split(',')
                        .map(|d| d.trim().to_string())
                        .filter(|d| !d.is_empty())
                        .collect();
                }
                _ => {}
            }
        }
        tasks.push(task);
    }

    Ok(ScheduleDocument {
        tasks,
        ..ScheduleDocument::default()
    })
}
