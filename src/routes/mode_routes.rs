use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::mode_controller::ModeController;
use crate::dto::planner_dto::{ModeRequest, ModeResponse};
use crate::state::AppState;

pub fn create_mode_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_mode).put(set_mode))
        .route("/toggle", post(toggle_mode))
}

async fn get_mode(State(state): State<AppState>) -> Json<ModeResponse> {
    Json(ModeController::new(state).get().await)
}

async fn set_mode(
    State(state): State<AppState>,
    Json(request): Json<ModeRequest>,
) -> Json<ModeResponse> {
    Json(ModeController::new(state).set(request).await)
}

async fn toggle_mode(State(state): State<AppState>) -> Json<ModeResponse> {
    Json(ModeController::new(state).toggle().await)
}
