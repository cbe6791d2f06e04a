//! The Visitor Repository.
//!
//! Turns visitor operations into statements from the catalog, runs them on the
//! injected executor, and maps the results into domain values or errors.
//!
//! Every id-keyed mutation reads before it writes (existence check, then
//! effect). The two statements do not share a transaction, so a concurrent
//! delete in between can still surface as a stale success.

use crate::domain::{
    Visitor, VisitorColumn, VisitorError, VisitorInput, VisitorResult, VisitorSummary,
};
use crate::storage::queries;
use crate::storage::QueryExecutor;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{info, warn};

pub const TABLE_CREATED: &str = "Visitors table created successfully.";
pub const ALL_VISITORS_DELETED: &str = "All visitors deleted successfully.";

pub fn visitor_deleted(id: i32) -> String {
    format!("Visitor with {} deleted successfully.", id)
}

/// Visitor CRUD over a shared query executor.
#[derive(Clone)]
pub struct VisitorRepository {
    executor: Arc<dyn QueryExecutor>,
}

impl VisitorRepository {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &Arc<dyn QueryExecutor> {
        &self.executor
    }

    /// Creates the `visitors` table if it does not exist yet.
    pub async fn create_table(&self) -> VisitorResult<&'static str> {
        self.executor.execute(queries::CREATE_TABLE, &[]).await?;
        info!("visitors table ensured");
        Ok(TABLE_CREATED)
    }

    /// Validates and inserts a visitor, returning the id the database assigned.
    pub async fn add_new_visitor(&self, input: &VisitorInput) -> VisitorResult<i32> {
        let visitor = input.validate()?;

        let result = self
            .executor
            .execute(queries::ADD_NEW_VISITOR, &visitor.params())
            .await?;
        let id = result
            .rows
            .first()
            .ok_or_else(|| VisitorError::InvalidRow("insert returned no rows".to_string()))
            .and_then(row_id)?;

        info!(id, "visitor added");
        Ok(id)
    }

    pub async fn list_all_visitors(&self) -> VisitorResult<Vec<VisitorSummary>> {
        let result = self.executor.execute(queries::LIST_ALL_VISITORS, &[]).await?;
        decode_rows(result.rows)
    }

    /// Returns the rows stored under `id` (at most one in practice).
    pub async fn view_visitor(&self, id: i32) -> VisitorResult<Vec<Visitor>> {
        self.ensure_exists(id).await?;
        let result = self
            .executor
            .execute(queries::VIEW_VISITOR, &[JsonValue::from(id)])
            .await?;
        decode_rows(result.rows)
    }

    /// Id of the visitor with the greatest id.
    pub async fn view_last_visitor(&self) -> VisitorResult<i32> {
        let result = self.executor.execute(queries::VIEW_LAST_VISITOR, &[]).await?;
        match result.rows.first() {
            Some(row) => row_id(row),
            None => {
                warn!("no visitors recorded yet");
                Err(VisitorError::NoVisitorsFound)
            }
        }
    }

    /// Sets one column of one visitor and returns the number of rows affected.
    ///
    /// `column` is checked against the mutable columns only after the
    /// existence check, so an unknown id wins over an unknown column.
    pub async fn update_visitor(
        &self,
        id: i32,
        column: &str,
        new_value: JsonValue,
    ) -> VisitorResult<u64> {
        self.ensure_exists(id).await?;

        let column: VisitorColumn = column
            .parse()
            .map_err(|column| VisitorError::InvalidColumn { column })?;

        let result = self
            .executor
            .execute(
                queries::update_visitor(column),
                &[new_value, JsonValue::from(id)],
            )
            .await?;

        info!(id, %column, rows = result.row_count, "visitor updated");
        Ok(result.row_count)
    }

    pub async fn delete_visitor(&self, id: i32) -> VisitorResult<String> {
        self.ensure_exists(id).await?;
        self.executor
            .execute(queries::DELETE_VISITOR, &[JsonValue::from(id)])
            .await?;

        info!(id, "visitor deleted");
        Ok(visitor_deleted(id))
    }

    /// Deletes every visitor; refuses when there is nothing to delete.
    pub async fn delete_all_visitors(&self) -> VisitorResult<&'static str> {
        if self.list_all_visitors().await?.is_empty() {
            warn!("delete-all requested on an empty table");
            return Err(VisitorError::NoVisitors);
        }
        self.executor.execute(queries::DELETE_ALL_VISITORS, &[]).await?;

        info!("all visitors deleted");
        Ok(ALL_VISITORS_DELETED)
    }

    async fn ensure_exists(&self, id: i32) -> VisitorResult<()> {
        let result = self
            .executor
            .execute(queries::VIEW_VISITOR, &[JsonValue::from(id)])
            .await?;
        if result.rows.is_empty() {
            warn!(id, "visitor not found");
            return Err(VisitorError::VisitorNotFound { id });
        }
        Ok(())
    }
}

fn row_id(row: &JsonValue) -> VisitorResult<i32> {
    row.get("id")
        .and_then(JsonValue::as_i64)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| VisitorError::InvalidRow(format!("row has no integer id: {}", row)))
}

fn decode_rows<T: DeserializeOwned>(rows: Vec<JsonValue>) -> VisitorResult<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| VisitorError::InvalidRow(e.to_string())))
        .collect()
}
