use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::modules::movies::core::movie::MovieId;
use crate::shared::http::api_error::ApiError;

/// `{id}` path segment. A segment that is not a valid id cannot name a
/// stored movie, so it is rejected as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieIdParam(pub MovieId);

impl<S> FromRequestParts<S> for MovieIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        raw.parse::<MovieId>()
            .map(MovieIdParam)
            .map_err(|_| ApiError::UnknownMovieId(raw))
    }
}
