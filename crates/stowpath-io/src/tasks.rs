//! Task lists: a source location plus the candidate destinations a task may
//! be sent to.
//!
//! Two formats are read. JSON is an array of [`Task`] objects. CSV is a
//! table with a header row, where one column names the source location and
//! another holds the candidates as a comma-separated list; the column names
//! come from [`TaskColumns`].

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{LoadError, json_type, read_file};

/// One task to assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Location the mover starts from.
    pub location: String,
    /// Candidate destinations, either a JSON list or one comma-separated
    /// string.
    #[serde(alias = "reserves", deserialize_with = "candidate_list")]
    pub candidates: Vec<String>,
}

impl Task {
    pub fn new(
        location: impl Into<String>,
        candidates: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            location: location.into(),
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateList {
    List(Vec<String>),
    Joined(String),
}

fn candidate_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match CandidateList::deserialize(deserializer)? {
        CandidateList::List(names) => tidy(names),
        CandidateList::Joined(joined) => split_candidates(&joined),
    })
}

/// Split a comma-separated candidate cell, dropping blanks.
fn split_candidates(joined: &str) -> Vec<String> {
    tidy(joined.split(','))
}

fn tidy<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// On-disk encoding of a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFormat {
    Json,
    Csv,
}

impl TaskFormat {
    /// `Csv` for a `.csv` extension (any case), `Json` otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Header names of the CSV columns holding the source location and the
/// candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskColumns {
    pub location: String,
    pub reserve: String,
}

impl TaskColumns {
    pub const DEFAULT_LOCATION: &'static str = "location";
    pub const DEFAULT_RESERVE: &'static str = "reserves";

    pub fn new(location: impl Into<String>, reserve: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            reserve: reserve.into(),
        }
    }
}

impl Default for TaskColumns {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOCATION, Self::DEFAULT_RESERVE)
    }
}

/// Parse a JSON array of tasks.
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, LoadError> {
    let doc: Value = serde_json::from_str(json)?;
    if !doc.is_array() {
        return Err(LoadError::InvalidRoot {
            expected: "array",
            got: json_type(&doc),
        });
    }
    Ok(serde_json::from_value(doc)?)
}

/// Parse a CSV task table. Columns other than `columns` are ignored.
pub fn parse_tasks_csv(text: &str, columns: &TaskColumns) -> Result<Vec<Task>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?;
    for column in [&columns.location, &columns.reserve] {
        if !headers.iter().any(|h| h == column.as_str()) {
            return Err(LoadError::MissingColumn(column.clone()));
        }
    }

    let mut tasks = Vec::new();
    for row in reader.deserialize::<HashMap<String, String>>() {
        let row = row?;
        let location = row.get(&columns.location).map(String::as_str);
        let reserve = row.get(&columns.reserve).map(String::as_str);
        tasks.push(Task {
            location: location.unwrap_or_default().trim().to_string(),
            candidates: split_candidates(reserve.unwrap_or_default()),
        });
    }
    Ok(tasks)
}

/// Read a task list, choosing the format from the file extension and using
/// the default CSV column names.
pub fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<Task>, LoadError> {
    let path = path.as_ref();
    load_tasks_as(path, TaskFormat::from_path(path), &TaskColumns::default())
}

/// Read a task list in an explicit format.
pub fn load_tasks_as(
    path: impl AsRef<Path>,
    format: TaskFormat,
    columns: &TaskColumns,
) -> Result<Vec<Task>, LoadError> {
    let path = path.as_ref();
    let text = read_file(path)?;
    let tasks = match format {
        TaskFormat::Json => parse_tasks(&text)?,
        TaskFormat::Csv => parse_tasks_csv(&text, columns)?,
    };
    log::info!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_as_list_or_joined_string() {
        let tasks = parse_tasks(
            r#"[
                {"location": "A11-120-00", "candidates": ["R1", "R2"]},
                {"location": "A11-120-10", "reserves": " R3, R4 ,,R5 "}
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks[0], Task::new("A11-120-00", ["R1", "R2"]));
        assert_eq!(tasks[1].candidates, ["R3", "R4", "R5"]);
    }

    #[test]
    fn object_root_is_rejected() {
        let err = parse_tasks(r#"{"location": "A"}"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidRoot {
                expected: "array",
                got: "object"
            }
        ));
    }

    #[test]
    fn missing_fields_are_errors() {
        assert!(matches!(
            parse_tasks(r#"[{"location": "A"}]"#),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn csv_reads_named_columns() {
        let text = "\
task_id, source_location, reserve_locations
1,A11-120-00,\"R1, R2\"
2, A11-120-10 ,R3
3,A11-120-20,
";
        let columns = TaskColumns::new("source_location", "reserve_locations");
        let tasks = parse_tasks_csv(text, &columns).unwrap();
        assert_eq!(
            tasks,
            [
                Task::new("A11-120-00", ["R1", "R2"]),
                Task::new("A11-120-10", ["R3"]),
                Task::new("A11-120-20", Vec::<String>::new()),
            ]
        );
    }

    #[test]
    fn csv_default_columns() {
        let tasks = parse_tasks_csv(
            "location,reserves\nA-1,\"B-1,B-2\"\n",
            &TaskColumns::default(),
        )
        .unwrap();
        assert_eq!(tasks, [Task::new("A-1", ["B-1", "B-2"])]);
    }

    #[test]
    fn csv_missing_column_is_reported() {
        let err = parse_tasks_csv("location,targets\nA,B\n", &TaskColumns::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(c) if c == "reserves"));
    }

    #[test]
    fn csv_ragged_row_is_an_error() {
        let err = parse_tasks_csv("location,reserves\nA,B,C\n", &TaskColumns::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(TaskFormat::from_path(Path::new("tasks.CSV")), TaskFormat::Csv);
        assert_eq!(TaskFormat::from_path(Path::new("tasks.json")), TaskFormat::Json);
        assert_eq!(TaskFormat::from_path(Path::new("tasks")), TaskFormat::Json);
    }
}
