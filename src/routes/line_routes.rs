use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::line_controller::LineController;
use crate::models::line::LineSnapshot;
use crate::state::AppState;

pub fn create_line_router() -> Router<AppState> {
    Router::new().route("/", get(get_line))
}

async fn get_line(State(state): State<AppState>) -> Json<LineSnapshot> {
    Json(LineController::new(state).snapshot().await)
}
