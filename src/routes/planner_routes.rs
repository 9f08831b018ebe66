use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::planner_controller::PlannerController;
use crate::dto::planner_dto::{PlannerQuery, PlannerResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_planner_router() -> Router<AppState> {
    Router::new().route("/recommendations", get(get_recommendations))
}

async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<PlannerQuery>,
) -> Result<Json<PlannerResponse>, AppError> {
    let controller = PlannerController::new(state);
    let response = controller.recommendations(query).await?;
    Ok(Json(response))
}
