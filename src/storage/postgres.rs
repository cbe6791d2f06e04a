//! Query executor implementation using PostgreSQL.

use crate::storage::executor::{QueryExecutor, QueryResult};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use futures::TryStreamExt;
use serde_json::{Map, Value as JsonValue};
use sqlx::postgres::{PgArguments, PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{Column, Either, PgPool, Postgres, Row, TypeInfo};
use std::borrow::Cow;
use tracing::debug;

/// A query executor that runs statements on a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool with at most `max_connections` connections.
    pub async fn connect(options: PgConnectOptions, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn execute(&self, sql: &str, params: &[JsonValue]) -> Result<QueryResult> {
        debug!(sql, ?params, "executing statement");

        let mut query = sqlx::query(sql);
        for param in params {
            query = bind_json(query, param);
        }

        let mut rows = Vec::new();
        let mut row_count = 0;
        let mut stream = query.fetch_many(&self.pool);
        while let Some(item) = stream.try_next().await? {
            match item {
                Either::Left(done) => row_count += done.rows_affected(),
                Either::Right(row) => rows.push(row_to_json(&row)?),
            }
        }

        Ok(QueryResult { rows, row_count })
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// How a JSON parameter goes over the wire.
///
/// Only integers keep a numeric type. Floats and booleans are sent as text so
/// the server's own input parsing (e.g. `'31.5'::int`) rejects them instead of
/// a numeric cast silently rounding.
#[derive(Debug, PartialEq)]
enum Param<'a> {
    Null,
    Int(i64),
    Text(Cow<'a, str>),
}

fn param_for(value: &JsonValue) -> Param<'_> {
    match value {
        JsonValue::Null => Param::Null,
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Param::Int(i),
            None => Param::Text(Cow::Owned(n.to_string())),
        },
        JsonValue::String(s) => Param::Text(Cow::Borrowed(s.as_str())),
        // Bools, arrays and objects go over as their JSON text.
        other => Param::Text(Cow::Owned(other.to_string())),
    }
}

fn bind_json<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q JsonValue,
) -> Query<'q, Postgres, PgArguments> {
    match param_for(value) {
        Param::Null => query.bind(None::<String>),
        Param::Int(i) => query.bind(i),
        Param::Text(Cow::Borrowed(s)) => query.bind(s),
        Param::Text(Cow::Owned(s)) => query.bind(s),
    }
}

fn row_to_json(row: &PgRow) -> Result<JsonValue> {
    let mut record = Map::with_capacity(row.columns().len());
    for column in row.columns() {
        let idx = column.ordinal();
        let type_name = column.type_info().name();
        let value = match type_name {
            "INT2" => row.try_get::<Option<i16>, _>(idx)?.map(JsonValue::from),
            "INT4" => row.try_get::<Option<i32>, _>(idx)?.map(JsonValue::from),
            "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(JsonValue::from),
            "FLOAT4" => row.try_get::<Option<f32>, _>(idx)?.map(JsonValue::from),
            "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map(JsonValue::from),
            "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map(JsonValue::from),
            "DATE" => row
                .try_get::<Option<NaiveDate>, _>(idx)?
                .map(|d| JsonValue::from(d.to_string())),
            "TIME" => row
                .try_get::<Option<NaiveTime>, _>(idx)?
                .map(|t| JsonValue::from(t.to_string())),
            _ => row
                .try_get::<Option<String>, _>(idx)
                .map_err(|e| {
                    anyhow!(
                        "Unsupported column type {} for column {}: {}",
                        type_name,
                        column.name(),
                        e
                    )
                })?
                .map(JsonValue::from),
        };
        record.insert(column.name().to_string(), value.unwrap_or(JsonValue::Null));
    }
    Ok(JsonValue::Object(record))
}
