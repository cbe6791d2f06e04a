use crate::domain::VisitorError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;

/// Maps a repository failure onto a status code and the JSON envelope.
pub fn visitor_error_response(err: VisitorError) -> (StatusCode, Json<ApiResponse>) {
    let status = match &err {
        VisitorError::Validation(_) | VisitorError::InvalidColumn { .. } => StatusCode::BAD_REQUEST,
        VisitorError::VisitorNotFound { .. }
        | VisitorError::NoVisitors
        | VisitorError::NoVisitorsFound => StatusCode::NOT_FOUND,
        VisitorError::Executor(_) | VisitorError::InvalidRow(_) => {
            error!(error = %err, "visitor operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::err(err.to_string())))
}

pub fn path_400(err: PathRejection) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::err(format!("Invalid visitor id: {}", err))),
    )
}
