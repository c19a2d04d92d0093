pub mod health;
pub mod recommend;

use std::any::Any;

use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::middleware::request_id;
use crate::response::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config().max_body_bytes;

    let routes = Router::new()
        .merge(recommend::root_router())
        .nest("/api", recommend::api_router())
        .nest("/health", health::router());

    with_common_layers(routes, max_body_bytes).with_state(state)
}

// request-id 在最外层，panic 产生的 500 同样带上 x-request-id 与 traceId
fn with_common_layers(routes: Router<AppState>, max_body_bytes: usize) -> Router<AppState> {
    routes
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
}

/// `CatchPanicLayer` 的回调：panic 转为统一的 500 错误体
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::internal(&detail).into_response()
}
