use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::movies::core::movie::NewMovie;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieBody {
    pub title: String,
    pub year: i32,
    pub genres: Vec<String>,
}

impl From<CreateMovieBody> for NewMovie {
    fn from(body: CreateMovieBody) -> Self {
        Self {
            title: body.title,
            year: body.year,
            genres: body.genres,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateMovieBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    let movie = state.movies.create(body.into()).await;
    (StatusCode::CREATED, Json(movie)).into_response()
}
