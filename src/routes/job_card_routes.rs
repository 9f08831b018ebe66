use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::fleet_controller::FleetController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::job_card_dto::{CreateJobCardRequest, JobCardQuery};
use crate::models::job_card::JobCard;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_job_card_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_job_cards).post(create_job_card))
        .route("/:id", delete(delete_job_card))
}

async fn list_job_cards(
    State(state): State<AppState>,
    Query(query): Query<JobCardQuery>,
) -> Result<Json<Vec<JobCard>>, AppError> {
    let controller = FleetController::new(state);
    let job_cards = controller.list_job_cards(query).await?;
    Ok(Json(job_cards))
}

async fn create_job_card(
    State(state): State<AppState>,
    Json(request): Json<CreateJobCardRequest>,
) -> Result<Json<ApiResponse<JobCard>>, AppError> {
    let controller = FleetController::new(state);
    let response = controller.create_job_card(request).await?;
    Ok(Json(response))
}

async fn delete_job_card(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<JobCard>>, AppError> {
    let controller = FleetController::new(state);
    let response = controller.delete_job_card(id).await?;
    Ok(Json(response))
}
