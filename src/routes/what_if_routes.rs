use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::what_if_controller::WhatIfController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::planner_dto::{WhatIfApplyResponse, WhatIfRequest, WhatIfResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_what_if_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_what_if).post(apply_what_if))
        .route("/reset", post(reset_what_if))
}

async fn get_what_if(State(state): State<AppState>) -> Json<WhatIfResponse> {
    Json(WhatIfController::new(state).current().await)
}

async fn apply_what_if(
    State(state): State<AppState>,
    Json(request): Json<WhatIfRequest>,
) -> Result<Json<ApiResponse<WhatIfApplyResponse>>, AppError> {
    let controller = WhatIfController::new(state);
    let response = controller.apply(request).await?;
    Ok(Json(response))
}

async fn reset_what_if(State(state): State<AppState>) -> Json<ApiResponse<WhatIfResponse>> {
    Json(WhatIfController::new(state).reset().await)
}
