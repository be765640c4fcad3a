use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Resource label applied when a task names no assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// One `tasks:` entry exactly as it appears in the document.
///
/// Every field is optional: an incomplete entry still loads and normalizes,
/// and only trips an error once the rendering stage needs the missing value.
/// Scalars of the wrong shape (a number where a name belongs, a date that
/// doesn't parse) degrade to `None` the same way, so a sloppy document is
/// rejected at the drawing boundary rather than at load time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub start: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub finish: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub resource: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub phase: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,

    /// Names of tasks this one depends on. Stored as written; dangling
    /// references are tolerated and arrows are not drawn yet.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A normalized schedule row: document fields with defaults applied plus the
/// derived duration columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRow {
    pub name: Option<String>,
    pub start: Option<NaiveDate>,
    pub finish: Option<NaiveDate>,
    pub resource: String,
    pub phase: String,
    pub description: String,
    pub dependencies: Vec<String>,
    /// Whole days between start and finish; `None` while either date is missing.
    pub duration_days: Option<i64>,
    pub duration_label: Option<String>,
}

impl From<TaskRecord> for TaskRow {
    fn from(record: TaskRecord) -> Self {
        let duration_days = match (record.start, record.finish) {
            (Some(start), Some(finish)) => Some((finish - start).num_days()),
            _ => None,
        };
        Self {
            name: record.name,
            start: record.start,
            finish: record.finish,
            resource: record.resource.unwrap_or_else(|| UNASSIGNED.to_string()),
            phase: record.phase.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            dependencies: record.dependencies,
            duration_days,
            duration_label: duration_days.map(duration_label),
        }
    }
}

/// Humanize a whole-day duration: "1 day", otherwise "N days" (including
/// zero-length and inverted ranges).
pub fn duration_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Try parsing a date string with several common formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d", "%m-%d-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(scalar_to_string)
        .as_deref()
        .and_then(parse_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duration_label_is_singular_only_for_one() {
        assert_eq!(duration_label(1), "1 day");
        assert_eq!(duration_label(0), "0 days");
        assert_eq!(duration_label(14), "14 days");
        assert_eq!(duration_label(-3), "-3 days");
    }

    #[test]
    fn duration_is_derived_in_whole_days() {
        let record: TaskRecord =
            serde_yaml::from_str("name: A\nstart: 2024-01-01\nfinish: 2024-01-02\n").unwrap();
        let row = TaskRow::from(record);
        assert_eq!(row.duration_days, Some(1));
        assert_eq!(row.duration_label.as_deref(), Some("1 day"));

        let record: TaskRecord =
            serde_yaml::from_str("name: B\nstart: 2024-01-01\nfinish: 2024-01-01\n").unwrap();
        let row = TaskRow::from(record);
        assert_eq!(row.duration_days, Some(0));
        assert_eq!(row.duration_label.as_deref(), Some("0 days"));
    }

    #[test]
    fn omitting_one_field_does_not_perturb_the_others() {
        let record: TaskRecord = serde_yaml::from_str(
            "name: Kickoff\nstart: 2024-03-01\nfinish: 2024-03-05\nphase: Setup\ndescription: first week\n",
        )
        .unwrap();
        let row = TaskRow::from(record);
        assert_eq!(row.resource, UNASSIGNED);
        assert_eq!(row.name.as_deref(), Some("Kickoff"));
        assert_eq!(row.start, Some(date(2024, 3, 1)));
        assert_eq!(row.finish, Some(date(2024, 3, 5)));
        assert_eq!(row.phase, "Setup");
        assert_eq!(row.description, "first week");
        assert!(row.dependencies.is_empty());
    }

    #[test]
    fn missing_fields_normalize_to_empty_not_error() {
        let record: TaskRecord = serde_yaml::from_str("resource: Bob\n").unwrap();
        let row = TaskRow::from(record);
        assert_eq!(row.name, None);
        assert_eq!(row.start, None);
        assert_eq!(row.finish, None);
        assert_eq!(row.resource, "Bob");
        assert_eq!(row.phase, "");
        assert_eq!(row.duration_days, None);
        assert_eq!(row.duration_label, None);
    }

    #[test]
    fn unparseable_dates_degrade_to_none() {
        let record: TaskRecord =
            serde_yaml::from_str("name: X\nstart: whenever\nfinish: 42\n").unwrap();
        assert_eq!(record.start, None);
        assert_eq!(record.finish, None);
    }

    #[test]
    fn alternate_date_formats_are_accepted() {
        assert_eq!(parse_date("2024-01-31"), Some(date(2024, 1, 31)));
        assert_eq!(parse_date("31/01/2024"), Some(date(2024, 1, 31)));
        assert_eq!(parse_date("31.01.2024"), Some(date(2024, 1, 31)));
        assert_eq!(parse_date("2024/01/31"), Some(date(2024, 1, 31)));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn numeric_scalars_coerce_to_strings() {
        let record: TaskRecord = serde_yaml::from_str("name: 42\nresource: 7\n").unwrap();
        assert_eq!(record.name.as_deref(), Some("42"));
        assert_eq!(record.resource.as_deref(), Some("7"));
    }

    #[test]
    fn dependencies_keep_document_order() {
        let record: TaskRecord =
            serde_yaml::from_str("name: C\ndependencies: [B, A, missing-task]\n").unwrap();
        assert_eq!(record.dependencies, vec!["B", "A", "missing-task"]);
    }
}
