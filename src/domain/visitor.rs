//! Visitor records and the mutable column set.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// A visitor record exactly as received from a caller.
///
/// Every field is kept as raw JSON so the validator can reject wrong types
/// (e.g. a numeric name) instead of failing at deserialization time.
#[derive(Deserialize, Serialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorInput {
    #[serde(default)]
    #[schema(value_type = String)]
    pub name: JsonValue,
    #[serde(default)]
    #[schema(value_type = i32)]
    pub age: JsonValue,
    #[serde(default)]
    #[schema(value_type = String, example = "2024-09-29")]
    pub date_of_visit: JsonValue,
    #[serde(default)]
    #[schema(value_type = String, example = "10:30")]
    pub time_of_visit: JsonValue,
    #[serde(default)]
    #[schema(value_type = String)]
    pub assistant: JsonValue,
    #[serde(default)]
    #[schema(value_type = String)]
    pub comments: JsonValue,
}

/// A visitor record that passed validation and is ready to be inserted.
///
/// `age` stays a JSON number: a fractional or out-of-range value is rejected
/// by the `INT` column, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVisitor {
    pub name: String,
    pub age: Number,
    pub date_of_visit: String,
    pub time_of_visit: String,
    pub assistant: String,
    pub comments: String,
}

impl NewVisitor {
    /// Insert parameters in statement order.
    pub fn params(&self) -> Vec<JsonValue> {
        vec![
            JsonValue::from(self.name.as_str()),
            JsonValue::Number(self.age.clone()),
            JsonValue::from(self.date_of_visit.as_str()),
            JsonValue::from(self.time_of_visit.as_str()),
            JsonValue::from(self.assistant.as_str()),
            JsonValue::from(self.comments.as_str()),
        ]
    }
}

/// A persisted visitor row.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Visitor {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub date_of_visit: String,
    pub time_of_visit: String,
    pub assistant: String,
    pub comments: String,
}

/// The `{id, name}` projection returned when listing visitors.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct VisitorSummary {
    pub id: i32,
    pub name: String,
}

/// The columns a single-column update may target. `id` is deliberately absent.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisitorColumn {
    Name,
    Age,
    DateOfVisit,
    TimeOfVisit,
    Assistant,
    Comments,
}

impl VisitorColumn {
    pub const ALL: [VisitorColumn; 6] = [
        VisitorColumn::Name,
        VisitorColumn::Age,
        VisitorColumn::DateOfVisit,
        VisitorColumn::TimeOfVisit,
        VisitorColumn::Assistant,
        VisitorColumn::Comments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorColumn::Name => "name",
            VisitorColumn::Age => "age",
            VisitorColumn::DateOfVisit => "date_of_visit",
            VisitorColumn::TimeOfVisit => "time_of_visit",
            VisitorColumn::Assistant => "assistant",
            VisitorColumn::Comments => "comments",
        }
    }
}

impl fmt::Display for VisitorColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisitorColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisitorColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
