//! The seam between visitor operations and whatever actually runs SQL.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Rows (as JSON objects keyed by column name) plus the affected-row count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<JsonValue>,
    pub row_count: u64,
}

impl QueryResult {
    pub fn from_rows(rows: Vec<JsonValue>) -> Self {
        let row_count = rows.len() as u64;
        Self { rows, row_count }
    }

    pub fn affected(row_count: u64) -> Self {
        Self {
            rows: Vec::new(),
            row_count,
        }
    }
}

/// Runs one parameterized statement (`$1`, `$2`, ... placeholders).
///
/// Implementations own pooling and connection serialization; callers share a
/// single handle.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, sql: &str, params: &[JsonValue]) -> anyhow::Result<QueryResult>;

    /// Releases backend resources. Further `execute` calls may fail afterwards.
    async fn close(&self) {}
}
