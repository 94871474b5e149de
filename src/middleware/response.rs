use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

/// Success envelope: `{ "success": true, "data": ... }`. Errors never pass
/// through here; they render via [`ApiError`].
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    data: T,
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK
    pub fn success(data: T) -> Self {
        Self {
            data,
            status: StatusCode::OK,
        }
    }

    /// 201 Created
    pub fn created(data: T) -> Self {
        Self {
            data,
            status: StatusCode::CREATED,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_value(&self.data) {
            Ok(data) => {
                let envelope = json!({
                    "success": true,
                    "data": data
                });
                (self.status, Json(envelope)).into_response()
            }
            Err(e) => {
                tracing::error!("failed to serialize response body: {}", e);
                ApiError::internal("An error occurred while processing your request").into_response()
            }
        }
    }
}

/// Handler result: success envelope or an [`ApiError`]
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;
