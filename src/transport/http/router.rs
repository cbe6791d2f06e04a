use crate::domain::{Visitor, VisitorColumn, VisitorInput, VisitorSummary};
use crate::transport::http::handlers::{health, visitors};
use crate::transport::http::types::{ApiResponse, UpdateVisitorRequest};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        visitors::create_table_handler,
        visitors::add_visitor_handler,
        visitors::list_visitors_handler,
        visitors::last_visitor_handler,
        visitors::view_visitor_handler,
        visitors::update_visitor_handler,
        visitors::delete_visitor_handler,
        visitors::delete_all_visitors_handler
    ),
    components(schemas(
        ApiResponse,
        VisitorInput,
        Visitor,
        VisitorSummary,
        VisitorColumn,
        UpdateVisitorRequest
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/visitors/table", post(visitors::create_table_handler))
        .route(
            "/visitors",
            post(visitors::add_visitor_handler)
                .get(visitors::list_visitors_handler)
                .delete(visitors::delete_all_visitors_handler),
        )
        .route("/visitors/last", get(visitors::last_visitor_handler))
        .route(
            "/visitors/:id",
            get(visitors::view_visitor_handler)
                .patch(visitors::update_visitor_handler)
                .delete(visitors::delete_visitor_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
