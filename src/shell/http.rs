use axum::{
    Router,
    http::{Method, Uri},
    routing::get,
};

use crate::modules::movies::use_cases::create_movie::inbound::http as create_http;
use crate::modules::movies::use_cases::delete_movie::inbound::http as delete_http;
use crate::modules::movies::use_cases::get_movie::inbound::http as get_http;
use crate::modules::movies::use_cases::list_movies::inbound::http as list_http;
use crate::modules::movies::use_cases::update_movie::inbound::http as update_http;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub const WELCOME: &str = "welcome to my Movie API";

pub fn router(state: AppState) -> Router {
    // Unsupported methods on a known path answer 404, same as an unknown path.
    Router::new()
        .route("/", get(welcome).fallback(route_not_found))
        .route(
            "/movies",
            get(list_http::handle)
                .post(create_http::handle)
                .fallback(route_not_found),
        )
        .route(
            "/movies/{id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state)
}

async fn welcome() -> &'static str {
    WELCOME
}

async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
