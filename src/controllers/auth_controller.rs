use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController {
    service: AuthService,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: AuthService::new(&state.config),
        }
    }

    pub fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        self.service.login(&request)
    }
}
