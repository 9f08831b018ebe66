use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Configura las rutas de autenticación
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(&state);
    let response = controller.login(request)?;
    Ok(Json(response))
}
