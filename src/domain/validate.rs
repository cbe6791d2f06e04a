//! Shape checks for visitor records, run before anything touches the database.
//!
//! Fields are checked in a fixed order (name, age, dateOfVisit, timeOfVisit,
//! assistant, comments) and the first violation wins.

use crate::domain::error::ValidationError;
use crate::domain::visitor::{NewVisitor, VisitorInput};
use serde_json::{Number, Value as JsonValue};

/// `null`, `false`, `0` and `""` are all treated as "not provided".
fn is_falsy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => false,
    }
}

fn has_letter(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
}

fn lettered_text(value: &JsonValue) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty() && has_letter(s))
}

/// Any positive number; integrality is left to the `INT` column.
fn positive_age(value: &JsonValue) -> Option<Number> {
    match value {
        JsonValue::Number(n) if n.as_f64().is_some_and(|f| f > 0.0) => Some(n.clone()),
        _ => None,
    }
}

fn present_text(value: &JsonValue) -> Option<String> {
    if is_falsy(value) {
        return None;
    }
    Some(match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Checks all six fields of a visitor record.
pub fn validate(
    name: &JsonValue,
    age: &JsonValue,
    date_of_visit: &JsonValue,
    time_of_visit: &JsonValue,
    assistant: &JsonValue,
    comments: &JsonValue,
) -> Result<(), ValidationError> {
    check(name, age, date_of_visit, time_of_visit, assistant, comments).map(|_| ())
}

fn check(
    name: &JsonValue,
    age: &JsonValue,
    date_of_visit: &JsonValue,
    time_of_visit: &JsonValue,
    assistant: &JsonValue,
    comments: &JsonValue,
) -> Result<NewVisitor, ValidationError> {
    let name = lettered_text(name).ok_or(ValidationError::InvalidName)?;
    let age = positive_age(age).ok_or(ValidationError::InvalidAge)?;
    let date_of_visit = present_text(date_of_visit).ok_or(ValidationError::InvalidDateOfVisit)?;
    let time_of_visit = present_text(time_of_visit).ok_or(ValidationError::InvalidTimeOfVisit)?;
    let assistant = lettered_text(assistant).ok_or(ValidationError::InvalidAssistant)?;
    let comments = comments
        .as_str()
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::InvalidComments)?;

    Ok(NewVisitor {
        name: name.to_string(),
        age,
        date_of_visit,
        time_of_visit,
        assistant: assistant.to_string(),
        comments: comments.to_string(),
    })
}

impl VisitorInput {
    /// Validates the record and converts it into its typed form.
    pub fn validate(&self) -> Result<NewVisitor, ValidationError> {
        check(
            &self.name,
            &self.age,
            &self.date_of_visit,
            &self.time_of_visit,
            &self.assistant,
            &self.comments,
        )
    }
}
