use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::job_card_dto::JobCardQuery;
use crate::models::analytics::TimelineResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/timeline", get(get_timeline))
        .route("/export/csv", get(export_csv))
        .route("/export/html", get(export_html))
}

async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<JobCardQuery>,
) -> Result<Json<TimelineResponse>, AppError> {
    let controller = ReportController::new(state);
    let response = controller.timeline(query).await?;
    Ok(Json(response))
}

async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<JobCardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let controller = ReportController::new(state);
    let export = controller.export_csv(query).await?;
    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    ))
}

async fn export_html(
    State(state): State<AppState>,
    Query(query): Query<JobCardQuery>,
) -> Result<Html<String>, AppError> {
    let controller = ReportController::new(state);
    let html = controller.export_html(query).await?;
    Ok(Html(html))
}
