//! Query executors for tests: a scripted stub that records every call, and a
//! small in-memory `visitors` table that understands the statement catalog.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use std::sync::Mutex;
use visitor_registry::storage::queries;
use visitor_registry::{QueryExecutor, QueryResult, VisitorColumn, VisitorInput};

pub fn sample_input() -> VisitorInput {
    serde_json::from_value(json!({
        "name": "John Doe",
        "age": 30,
        "dateOfVisit": "2024-09-29",
        "timeOfVisit": "10:30",
        "assistant": "Jane Smith",
        "comments": "No comments"
    }))
    .unwrap()
}

pub fn full_row(id: i64) -> JsonValue {
    json!({
        "id": id,
        "name": "John Doe",
        "age": 30,
        "date_of_visit": "2024-09-29",
        "time_of_visit": "10:30:00",
        "assistant": "Jane Smith",
        "comments": "No comments"
    })
}

type Responder = dyn Fn(&str, &[JsonValue]) -> anyhow::Result<QueryResult> + Send + Sync;

/// Answers each statement with a scripted response and keeps a call log.
pub struct StubExecutor {
    calls: Mutex<Vec<(String, Vec<JsonValue>)>>,
    respond: Box<Responder>,
}

impl StubExecutor {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str, &[JsonValue]) -> anyhow::Result<QueryResult> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    /// Insert returns id 1, id lookups find a row, everything else is empty.
    pub fn with_existing_visitor() -> Self {
        Self::new(|sql, _| {
            if sql == queries::ADD_NEW_VISITOR {
                return Ok(QueryResult::from_rows(vec![json!({ "id": 1 })]));
            }
            if sql == queries::VIEW_VISITOR {
                return Ok(QueryResult::from_rows(vec![full_row(1)]));
            }
            if sql.starts_with("UPDATE") || sql == queries::DELETE_VISITOR {
                return Ok(QueryResult::affected(1));
            }
            Ok(QueryResult::default())
        })
    }

    /// Every statement returns no rows.
    pub fn empty() -> Self {
        Self::new(|_, _| Ok(QueryResult::default()))
    }

    pub fn calls(&self) -> Vec<(String, Vec<JsonValue>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn statements(&self) -> Vec<String> {
        self.calls().into_iter().map(|(sql, _)| sql).collect()
    }

    pub fn last_call(&self) -> (String, Vec<JsonValue>) {
        self.calls().pop().expect("no statements executed")
    }
}

#[async_trait]
impl QueryExecutor for StubExecutor {
    async fn execute(&self, sql: &str, params: &[JsonValue]) -> anyhow::Result<QueryResult> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        (self.respond)(sql, params)
    }
}

#[derive(Default)]
struct Table {
    created: bool,
    next_id: i64,
    rows: Vec<JsonValue>,
}

/// A `visitors` table kept in memory, driven by the exact catalog statements.
#[derive(Default)]
pub struct InMemoryVisitors {
    table: Mutex<Table>,
}

impl InMemoryVisitors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

fn id_param(params: &[JsonValue], idx: usize) -> anyhow::Result<i64> {
    params
        .get(idx)
        .and_then(JsonValue::as_i64)
        .ok_or_else(|| anyhow::anyhow!("missing integer parameter ${}", idx + 1))
}

#[async_trait]
impl QueryExecutor for InMemoryVisitors {
    async fn execute(&self, sql: &str, params: &[JsonValue]) -> anyhow::Result<QueryResult> {
        let mut table = self.table.lock().unwrap();

        if sql == queries::CREATE_TABLE {
            table.created = true;
            return Ok(QueryResult::default());
        }
        if sql == queries::PING {
            return Ok(QueryResult::from_rows(vec![json!({ "?column?": 1 })]));
        }
        if !table.created {
            return Err(anyhow::anyhow!("relation \"visitors\" does not exist"));
        }

        if sql == queries::ADD_NEW_VISITOR {
            table.next_id += 1;
            let row = json!({
                "id": table.next_id,
                "name": params[0],
                "age": params[1],
                "date_of_visit": params[2],
                "time_of_visit": params[3],
                "assistant": params[4],
                "comments": params[5],
            });
            table.rows.push(row.clone());
            return Ok(QueryResult::from_rows(vec![row]));
        }
        if sql == queries::LIST_ALL_VISITORS {
            let rows = table
                .rows
                .iter()
                .map(|r| json!({ "id": r["id"], "name": r["name"] }))
                .collect();
            return Ok(QueryResult::from_rows(rows));
        }
        if sql == queries::VIEW_VISITOR {
            let id = id_param(params, 0)?;
            let rows = table
                .rows
                .iter()
                .filter(|r| r["id"] == id)
                .cloned()
                .collect();
            return Ok(QueryResult::from_rows(rows));
        }
        if sql == queries::VIEW_LAST_VISITOR {
            let last = table
                .rows
                .iter()
                .max_by_key(|r| r["id"].as_i64())
                .cloned();
            return Ok(QueryResult::from_rows(last.into_iter().collect()));
        }
        if sql == queries::DELETE_VISITOR {
            let id = id_param(params, 0)?;
            let before = table.rows.len();
            table.rows.retain(|r| r["id"] != id);
            return Ok(QueryResult::affected((before - table.rows.len()) as u64));
        }
        if sql == queries::DELETE_ALL_VISITORS {
            let removed = table.rows.len() as u64;
            table.rows.clear();
            return Ok(QueryResult::affected(removed));
        }
        if let Some(column) = VisitorColumn::ALL
            .into_iter()
            .find(|c| queries::update_visitor(*c) == sql)
        {
            let id = id_param(params, 1)?;
            let mut affected = 0;
            for row in table.rows.iter_mut().filter(|r| r["id"] == id) {
                row[column.as_str()] = params[0].clone();
                affected += 1;
            }
            return Ok(QueryResult::affected(affected));
        }

        Err(anyhow::anyhow!("unrecognized statement: {}", sql))
    }
}
