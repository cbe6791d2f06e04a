//! Round trip against a real Postgres.
//!
//! Runs only when `DATABASE_URL` is set (e.g. via `.env`); otherwise it
//! returns early. The test wipes the `visitors` table.

use serde_json::json;
use std::sync::Arc;
use visitor_registry::infra::config;
use visitor_registry::{PgExecutor, QueryExecutor, VisitorError, VisitorInput, VisitorRepository};

#[tokio::test]
async fn test_postgres_roundtrip() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping Postgres round trip");
        return Ok(());
    }

    let executor = Arc::new(PgExecutor::connect(config::database_options()?, 2).await?);
    let visitors = VisitorRepository::new(executor.clone());

    visitors.create_table().await?;
    visitors.create_table().await?;
    match visitors.delete_all_visitors().await {
        Ok(_) | Err(VisitorError::NoVisitors) => {}
        Err(e) => return Err(e.into()),
    }

    let input: VisitorInput = serde_json::from_value(json!({
        "name": "John Doe",
        "age": 30,
        "dateOfVisit": "2024-09-29",
        "timeOfVisit": "10:30",
        "assistant": "Jane Smith",
        "comments": "No comments"
    }))?;
    let id = visitors.add_new_visitor(&input).await?;
    assert_eq!(visitors.view_last_visitor().await?, id);

    let rows = visitors.view_visitor(id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date_of_visit, "2024-09-29");
    assert_eq!(rows[0].time_of_visit, "10:30:00");

    assert_eq!(visitors.update_visitor(id, "date_of_visit", json!("2024-10-01")).await?, 1);
    assert_eq!(visitors.update_visitor(id, "age", json!(31)).await?, 1);
    let rows = visitors.view_visitor(id).await?;
    assert_eq!(rows[0].date_of_visit, "2024-10-01");
    assert_eq!(rows[0].age, 31);

    // Not a date: the database rejects it and the error comes back untouched.
    let err = visitors
        .update_visitor(id, "date_of_visit", json!("someday"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        VisitorError::Executor(ref e) if e.downcast_ref::<sqlx::Error>().is_some()
    ));

    // The INT column takes neither fractions nor booleans, and nothing is rounded.
    for value in [json!(31.5), json!(true), json!(3_000_000_000_i64)] {
        let err = visitors.update_visitor(id, "age", value).await.unwrap_err();
        assert!(matches!(err, VisitorError::Executor(_)));
    }
    assert_eq!(visitors.view_visitor(id).await?[0].age, 31);

    let mut fractional = input.clone();
    fractional.age = json!(30.5);
    assert!(matches!(
        visitors.add_new_visitor(&fractional).await,
        Err(VisitorError::Executor(_))
    ));
    assert_eq!(visitors.view_last_visitor().await?, id);

    assert_eq!(
        visitors.delete_visitor(id).await?,
        format!("Visitor with {} deleted successfully.", id)
    );
    assert!(matches!(
        visitors.view_visitor(id).await,
        Err(VisitorError::VisitorNotFound { .. })
    ));

    executor.close().await;
    Ok(())
}
