use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::fleet_controller::FleetController;
use crate::models::train::Train;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fleet_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trains))
        .route("/:train_id", get(get_train))
}

async fn list_trains(State(state): State<AppState>) -> Json<Vec<Train>> {
    let controller = FleetController::new(state);
    Json(controller.list_trains().await)
}

async fn get_train(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> Result<Json<Train>, AppError> {
    let controller = FleetController::new(state);
    let train = controller.get_train(&train_id).await?;
    Ok(Json(train))
}
