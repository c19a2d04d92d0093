use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::extractors::JsonBody;
use crate::recommender::{LearnerSnapshot, Recommendation};
use crate::response::{recommendations, AppError};
use crate::state::AppState;

/// 根路径上的路由：服务标识与原始的 `/recommend`（直接返回数组）
pub fn root_router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_banner))
        .route("/recommend", post(learning_path_bare))
}

/// 挂载在 `/api` 下的路由
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/recommend", post(recommend_placeholder))
        .route("/learning-path", post(learning_path_wrapped))
}

pub async fn service_banner() -> &'static str {
    "AI Recommendation Service"
}

fn compute_learning_path(
    state: &AppState,
    snapshot: &LearnerSnapshot,
) -> Result<Vec<Recommendation>, AppError> {
    let out = state.recommender().recommend_learning_path(snapshot)?;
    tracing::debug!(
        topics = snapshot.topics.len(),
        recommendations = out.len(),
        "Learning path computed"
    );
    Ok(out)
}

async fn learning_path_bare(
    State(state): State<AppState>,
    JsonBody(snapshot): JsonBody<LearnerSnapshot>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(compute_learning_path(&state, &snapshot)?))
}

async fn learning_path_wrapped(
    State(state): State<AppState>,
    JsonBody(snapshot): JsonBody<LearnerSnapshot>,
) -> Result<impl IntoResponse, AppError> {
    Ok(recommendations(compute_learning_path(&state, &snapshot)?))
}

// 请求体只要是合法 JSON 即可，不按学习快照的结构校验
async fn recommend_placeholder(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<serde_json::Value>,
) -> impl IntoResponse {
    recommendations(state.recommender().recommend(&payload))
}
