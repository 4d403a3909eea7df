pub mod game;
pub mod render;

use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;

pub type PageResult<T, E = PageError> = std::result::Result<T, E>;

/// Page-surface counterpart of `ApiError` - failures render as an HTML
/// error page instead of a JSON body.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid form input: {0}")]
    InvalidForm(String),

    #[error("Database error")]
    Database(#[source] gamebox_dal::SqlxError),
}

impl From<gamebox_dal::Error> for PageError {
    fn from(error: gamebox_dal::Error) -> Self {
        match error {
            gamebox_dal::Error::RecordNotFound(what) => PageError::NotFound(what),
            gamebox_dal::Error::DatabaseError(e) => PageError::Database(e),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match &self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::InvalidForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PageError::Database(error) => {
                tracing::error!(%error, "database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = render::layout(
            "Error",
            &format!(
                "<h1>{}</h1><p>{}</p><p><a href=\"/games\">Back to games</a></p>",
                status,
                render::html_escape(&self.to_string())
            ),
        );
        (status, Html(body)).into_response()
    }
}
