use crate::repository_from_request;
use crate::state::AppState;
#[allow(unused_imports)]
use axum::routing::{delete, get, patch, post, put};
use gamebox_dal::game::GameRepository;

repository_from_request!(GameRepository);

pub mod crud_api {
    use super::*;
    use crate::error::ApiResult;
    use axum::{
        Json,
        extract::{Path, State},
        response::IntoResponse,
    };
    use axum_valid::Garde;
    use gamebox_dal::game::{CreateGame, ReplaceGame, UpdateGame};
    use http::StatusCode;

    pub async fn create(
        repository: GameRepository,
        Garde(Json(payload)): Garde<Json<CreateGame>>,
    ) -> ApiResult<impl IntoResponse> {
        let record = repository.create(payload).await?;

        Ok((StatusCode::CREATED, Json(record)))
    }

    pub async fn list(
        repository: GameRepository,
        State(state): State<AppState>,
    ) -> ApiResult<impl IntoResponse> {
        let records = repository.list(state.config().list_limit).await?;
        Ok((StatusCode::OK, Json(records)))
    }

    pub async fn get(
        Path(id): Path<i64>,
        repository: GameRepository,
    ) -> ApiResult<impl IntoResponse> {
        let record = repository.get(id).await?;

        Ok((StatusCode::OK, Json(record)))
    }

    /// Partial update - only fields present in the body are overwritten.
    pub async fn update(
        Path(id): Path<i64>,
        repository: GameRepository,
        Garde(Json(payload)): Garde<Json<UpdateGame>>,
    ) -> ApiResult<impl IntoResponse> {
        let record = repository.update(id, payload).await?;

        Ok((StatusCode::OK, Json(record)))
    }

    /// Full replace - id comes in the body, all fields are overwritten.
    pub async fn replace(
        repository: GameRepository,
        Garde(Json(payload)): Garde<Json<ReplaceGame>>,
    ) -> ApiResult<impl IntoResponse> {
        let record = repository.replace(payload).await?;

        Ok((StatusCode::OK, Json(record)))
    }

    pub async fn delete(
        Path(id): Path<i64>,
        repository: GameRepository,
    ) -> ApiResult<impl IntoResponse> {
        repository.delete(id).await?;

        Ok((StatusCode::NO_CONTENT, ()))
    }
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route(
            "/",
            get(crud_api::list)
                .post(crud_api::create)
                .put(crud_api::replace),
        )
        .route(
            "/{id}",
            get(crud_api::get)
                .patch(crud_api::update)
                .delete(crud_api::delete),
        )
}
