// src/bin/api_server.rs

use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use visitor_registry::infra::{config, logging};
use visitor_registry::transport;
use visitor_registry::{PgExecutor, QueryExecutor, VisitorRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing(&config::log_level());

    // --- Database Initialization ---
    info!("connecting to Postgres");
    let executor = Arc::new(
        PgExecutor::connect(config::database_options()?, config::max_connections()?).await?,
    );
    let visitors = VisitorRepository::new(executor.clone());
    let message = visitors.create_table().await?;
    info!("{}", message);

    // --- API Server Initialization ---
    let app_state = transport::http::AppState { visitors };
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("failed to listen for shutdown signal: {}", e);
            }
            info!("shutdown signal received");
        })
        .await;

    executor.close().await;
    info!("connection pool closed");

    served?;
    Ok(())
}
