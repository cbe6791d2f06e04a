use crate::domain::VisitorInput;
use crate::transport::http::handlers::common::{path_400, visitor_error_response};
use crate::transport::http::types::{json_422, ApiResponse, AppState, UpdateVisitorRequest};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

fn ok(data: serde_json::Value) -> axum::response::Response {
    (StatusCode::OK, Json(ApiResponse::ok(data))).into_response()
}

#[utoipa::path(
    post,
    path = "/visitors/table",
    responses(
        (status = 200, description = "Table exists", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_table_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.visitors.create_table().await {
        Ok(message) => ok(json!({ "message": message })),
        Err(e) => visitor_error_response(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/visitors",
    request_body = VisitorInput,
    responses(
        (status = 201, description = "Visitor created", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn add_visitor_handler(
    State(state): State<AppState>,
    request: Result<Json<VisitorInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "a visitor object").into_response(),
    };

    match state.visitors.add_new_visitor(&input).await {
        Ok(id) => (StatusCode::CREATED, Json(ApiResponse::ok(json!({ "id": id })))).into_response(),
        Err(e) => visitor_error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/visitors",
    responses(
        (status = 200, description = "Ids and names of all visitors", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_visitors_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.visitors.list_all_visitors().await {
        Ok(visitors) => ok(json!(visitors)),
        Err(e) => visitor_error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/visitors/last",
    responses(
        (status = 200, description = "Id of the most recently added visitor", body = ApiResponse),
        (status = 404, description = "No visitors recorded", body = ApiResponse)
    )
)]
pub async fn last_visitor_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.visitors.view_last_visitor().await {
        Ok(id) => ok(json!({ "id": id })),
        Err(e) => visitor_error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/visitors/{id}",
    params(("id" = i32, Path, description = "Visitor id")),
    responses(
        (status = 200, description = "Visitor rows", body = ApiResponse),
        (status = 404, description = "Visitor not found", body = ApiResponse)
    )
)]
pub async fn view_visitor_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_400(e).into_response(),
    };

    match state.visitors.view_visitor(id).await {
        Ok(rows) => ok(json!(rows)),
        Err(e) => visitor_error_response(e).into_response(),
    }
}

#[utoipa::path(
    patch,
    path = "/visitors/{id}",
    params(("id" = i32, Path, description = "Visitor id")),
    request_body = UpdateVisitorRequest,
    responses(
        (status = 200, description = "Column updated", body = ApiResponse),
        (status = 400, description = "Invalid column", body = ApiResponse),
        (status = 404, description = "Visitor not found", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn update_visitor_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    request: Result<Json<UpdateVisitorRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_400(e).into_response(),
    };
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"column\": \"...\", \"value\": ...}").into_response();
        }
    };

    match state
        .visitors
        .update_visitor(id, &request.column, request.value)
        .await
    {
        Ok(rows_affected) => ok(json!({ "rows_affected": rows_affected })),
        Err(e) => visitor_error_response(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/visitors/{id}",
    params(("id" = i32, Path, description = "Visitor id")),
    responses(
        (status = 200, description = "Visitor deleted", body = ApiResponse),
        (status = 404, description = "Visitor not found", body = ApiResponse)
    )
)]
pub async fn delete_visitor_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_400(e).into_response(),
    };

    match state.visitors.delete_visitor(id).await {
        Ok(message) => ok(json!({ "message": message })),
        Err(e) => visitor_error_response(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/visitors",
    responses(
        (status = 200, description = "All visitors deleted", body = ApiResponse),
        (status = 404, description = "Nothing to delete", body = ApiResponse)
    )
)]
pub async fn delete_all_visitors_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.visitors.delete_all_visitors().await {
        Ok(message) => ok(json!({ "message": message })),
        Err(e) => visitor_error_response(e).into_response(),
    }
}
