use axum::response::{IntoResponse, Response};
use http::StatusCode;

pub type Error = anyhow::Error;
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type ApiResult<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Database error")]
    Database(#[source] gamebox_dal::SqlxError),
}

impl From<gamebox_dal::Error> for ApiError {
    fn from(error: gamebox_dal::Error) -> Self {
        match error {
            gamebox_dal::Error::RecordNotFound(what) => ApiError::NotFound(what),
            gamebox_dal::Error::DatabaseError(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(error) => {
                tracing::error!(%error, "database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = axum::Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
