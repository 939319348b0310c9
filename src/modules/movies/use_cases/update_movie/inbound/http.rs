use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::movies::adapters::inbound::movie_id::MovieIdParam;
use crate::modules::movies::core::movie::MoviePatch;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovieBody {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
}

impl From<UpdateMovieBody> for MoviePatch {
    fn from(body: UpdateMovieBody) -> Self {
        Self {
            title: body.title,
            year: body.year,
            genres: body.genres,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    MovieIdParam(id): MovieIdParam,
    body: Result<Json<UpdateMovieBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match state.movies.update(id, body.into()).await {
        Ok(movie) => Json(movie).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
