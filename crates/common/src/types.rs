use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Review status codes reported by the homework API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Look up a status code in the verdict table.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict shown to the student.
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Work checked: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "Work taken up for review by reviewer.",
            HomeworkStatus::Rejected => "Work checked: the reviewer has comments.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A single homework entry from the API. Fields other than these two are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
    /// The record as received, for error messages.
    pub raw: String,
}

impl From<&Value> for HomeworkRecord {
    fn from(value: &Value) -> Self {
        Self {
            homework_name: value.get("homework_name").and_then(scalar_text),
            status: value.get("status").and_then(scalar_text),
            raw: value.to_string(),
        }
    }
}

/// Text form of a truthy scalar; `None` for null, empty and falsy values.
fn scalar_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A response that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Never empty.
    pub homeworks: Vec<HomeworkRecord>,
    /// Never zero.
    pub current_date: i64,
}

impl ApiResponse {
    /// The only record the poller looks at. Later entries are ignored.
    pub fn latest(&self) -> &HomeworkRecord {
        &self.homeworks[0]
    }
}

/// JSON truthiness: null, false, zero, and empty strings or collections are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
