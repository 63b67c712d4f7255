mod handlers;
mod models;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{get_answer, not_found};
#[allow(unused_imports)]
pub use models::{AnswerQuery, AnswerResponse, ErrorResponse};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/get-answer", get(get_answer))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}
