//! Figure assembly: turn the normalized task table into a drawable timeline.
//!
//! This is where the loader's leniency ends. Every row must carry a usable
//! name and both dates before anything can be drawn; the first row that
//! doesn't aborts the build with a validation error naming it.

use chrono::{Duration, NaiveDate};
use plotters::style::RGBColor;
use tracing::warn;

use crate::error::ChartError;
use crate::model::{ChartConfig, TaskRow};

use super::theme::{ThemeCapability, FALLBACK_COLORS};

/// Which field supplies the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    /// One lane per task, colored by resource.
    #[default]
    Task,
    /// One lane per resource, colored by task.
    Resource,
}

/// A single drawable interval.
#[derive(Debug, Clone)]
pub struct Bar {
    /// Text drawn beside the interval.
    pub label: String,
    /// Color key; doubles as the legend entry.
    pub legend: String,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    /// Vertical slot, 0 = top.
    pub lane: usize,
    pub color: RGBColor,
}

/// A fully validated, ready-to-draw timeline.
#[derive(Debug, Clone)]
pub struct TimelineFigure {
    pub title: String,
    pub config: ChartConfig,
    pub bars: Vec<Bar>,
    /// Lane keys, top to bottom.
    pub lanes: Vec<String>,
    /// Legend entries with their swatch colors, in first-appearance order.
    pub legend: Vec<(String, RGBColor)>,
    pub x_min: NaiveDate,
    pub x_max: NaiveDate,
    /// Branding resolved against theme availability.
    pub branding: bool,
    /// The normalized table, kept for data exports.
    pub rows: Vec<TaskRow>,
}

impl TimelineFigure {
    /// Validate the task table and lay the bars out.
    pub fn build(
        title: &str,
        rows: Vec<TaskRow>,
        config: &ChartConfig,
        group_by: GroupBy,
        theme: ThemeCapability,
    ) -> Result<Self, ChartError> {
        if rows.is_empty() {
            return Err(ChartError::Validation("schedule contains no tasks".into()));
        }

        // Required-field check, deferred here from load time.
        let mut validated: Vec<(String, NaiveDate, NaiveDate, &TaskRow)> =
            Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let name = match row.name.as_deref().filter(|n| !n.is_empty()) {
                Some(n) => n.to_string(),
                None => {
                    return Err(ChartError::Validation(format!(
                        "task {} has no name",
                        index + 1
                    )))
                }
            };
            let start = row.start.ok_or_else(|| {
                ChartError::Validation(format!(
                    "task {} ('{name}') has no usable start date",
                    index + 1
                ))
            })?;
            let finish = row.finish.ok_or_else(|| {
                ChartError::Validation(format!(
                    "task {} ('{name}') has no usable finish date",
                    index + 1
                ))
            })?;
            validated.push((name, start, finish, row));
        }

        let colors = match theme.color_sequence(&config.palette) {
            Some(sequence) => sequence,
            None => {
                if theme.available {
                    warn!(palette = %config.palette, "unknown palette, using fallback colors");
                }
                FALLBACK_COLORS
            }
        };

        let mut lanes: Vec<String> = Vec::new();
        let mut legend_keys: Vec<String> = Vec::new();
        let mut bars = Vec::with_capacity(validated.len());
        for (name, start, finish, row) in &validated {
            let (lane_key, color_key) = match group_by {
                GroupBy::Task => (name.clone(), row.resource.clone()),
                GroupBy::Resource => (row.resource.clone(), name.clone()),
            };
            let lane = position_of(&mut lanes, lane_key);
            let color_index = position_of(&mut legend_keys, color_key);
            let color = colors[color_index % colors.len()];
            let label = match &row.duration_label {
                Some(duration) => format!("{name} ({duration})"),
                None => name.clone(),
            };
            bars.push(Bar {
                label,
                legend: legend_keys[color_index].clone(),
                start: *start,
                finish: *finish,
                lane,
                color,
            });
        }

        let legend = legend_keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), colors[i % colors.len()]))
            .collect();

        // Pad the span by a day on both sides so bars never touch the frame
        // and a single zero-length task still yields a non-degenerate range.
        let mut earliest = validated[0].1.min(validated[0].2);
        let mut latest = validated[0].1.max(validated[0].2);
        for (_, start, finish, _) in &validated {
            earliest = earliest.min((*start).min(*finish));
            latest = latest.max((*start).max(*finish));
        }

        if config.show_dependencies {
            warn!("dependency arrows are not drawn yet; ignoring show_dependencies");
        }
        let branding = config.add_branding && theme.available;
        if config.add_branding && !theme.available {
            warn!("branding requested but theming is unavailable in this build");
        }

        Ok(Self {
            title: title.to_string(),
            config: config.clone(),
            bars,
            lanes,
            legend,
            x_min: earliest - Duration::days(1),
            x_max: latest + Duration::days(1),
            branding,
            rows,
        })
    }
}

/// Index of `key` in `keys`, appending it on first sight.
fn position_of(keys: &mut Vec<String>, key: String) -> usize {
    match keys.iter().position(|k| *k == key) {
        Some(index) => index,
        None => {
            keys.push(key);
            keys.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::document::{normalize, ScheduleDocument};

    fn theme() -> ThemeCapability {
        ThemeCapability::detect()
    }

    fn config() -> ChartConfig {
        ChartConfig::default()
    }

    fn rows_from(yaml: &str) -> Vec<TaskRow> {
        let document: ScheduleDocument = serde_yaml::from_str(yaml).unwrap();
        normalize(&document.tasks)
    }

    #[test]
    fn empty_schedule_fails_validation() {
        let error = TimelineFigure::build("T", vec![], &config(), GroupBy::Task, theme());
        assert!(matches!(error, Err(ChartError::Validation(_))));
    }

    #[test]
    fn missing_start_date_names_the_row() {
        let rows = rows_from("tasks:\n  - name: Alpha\n    finish: 2024-01-05\n");
        let error = TimelineFigure::build("T", rows, &config(), GroupBy::Task, theme()).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Alpha"));
        assert!(message.contains("start"));
    }

    #[test]
    fn nameless_task_fails_validation() {
        let rows = rows_from("tasks:\n  - start: 2024-01-01\n    finish: 2024-01-05\n");
        let error = TimelineFigure::build("T", rows, &config(), GroupBy::Task, theme()).unwrap_err();
        assert!(error.to_string().contains("task 1"));
    }

    #[test]
    fn lanes_follow_document_order_and_colors_follow_first_appearance() {
        let rows = rows_from(
            "tasks:\n  - name: A\n    start: 2024-01-01\n    finish: 2024-01-05\n    resource: Ann\n  - name: B\n    start: 2024-01-03\n    finish: 2024-01-10\n    resource: Bob\n  - name: C\n    start: 2024-01-04\n    finish: 2024-01-06\n    resource: Ann\n",
        );
        let figure =
            TimelineFigure::build("T", rows, &config(), GroupBy::Task, theme()).unwrap();

        assert_eq!(figure.lanes, vec!["A", "B", "C"]);
        let legend_keys: Vec<_> = figure.legend.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(legend_keys, vec!["Ann", "Bob"]);
        // Ann's two bars share a color.
        assert_eq!(figure.bars[0].color, figure.bars[2].color);
        assert_ne!(figure.bars[0].color, figure.bars[1].color);
    }

    #[test]
    fn resource_grouping_swaps_lanes_and_legend() {
        let rows = rows_from(
            "tasks:\n  - name: A\n    start: 2024-01-01\n    finish: 2024-01-05\n    resource: Ann\n  - name: B\n    start: 2024-01-03\n    finish: 2024-01-10\n    resource: Ann\n",
        );
        let figure =
            TimelineFigure::build("T", rows, &config(), GroupBy::Resource, theme()).unwrap();

        assert_eq!(figure.lanes, vec!["Ann"]);
        let legend_keys: Vec<_> = figure.legend.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(legend_keys, vec!["A", "B"]);
        assert_eq!(figure.bars[0].lane, figure.bars[1].lane);
    }

    #[test]
    fn span_is_padded_and_covers_inverted_ranges() {
        let rows = rows_from(
            "tasks:\n  - name: Backwards\n    start: 2024-02-10\n    finish: 2024-02-01\n",
        );
        let figure = TimelineFigure::build("T", rows, &config(), GroupBy::Task, theme()).unwrap();
        assert_eq!(figure.x_min, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(figure.x_max, NaiveDate::from_ymd_opt(2024, 2, 11).unwrap());
        assert_eq!(figure.bars[0].label, "Backwards (-9 days)");
    }

    #[test]
    fn duration_appears_in_the_bar_label() {
        let rows = rows_from(
            "tasks:\n  - name: Short\n    start: 2024-01-01\n    finish: 2024-01-02\n",
        );
        let figure = TimelineFigure::build("T", rows, &config(), GroupBy::Task, theme()).unwrap();
        assert_eq!(figure.bars[0].label, "Short (1 day)");
    }
}
