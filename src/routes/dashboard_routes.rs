use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::report_controller::ReportController;
use crate::models::analytics::{ChartsResponse, DashboardSummary};
use crate::state::AppState;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/charts", get(get_charts))
}

async fn get_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(ReportController::new(state).summary().await)
}

async fn get_charts(State(state): State<AppState>) -> Json<ChartsResponse> {
    Json(ReportController::new(state).charts().await)
}
