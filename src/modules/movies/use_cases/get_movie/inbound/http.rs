use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::movies::adapters::inbound::movie_id::MovieIdParam;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, MovieIdParam(id): MovieIdParam) -> Response {
    match state.movies.get_one(id).await {
        Ok(movie) => Json(movie).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
