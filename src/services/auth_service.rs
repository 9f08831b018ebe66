//! Servicio de autenticación
//!
//! Comprobación de las credenciales demo de la pantalla de login.
//! No emite tokens ni mantiene sesiones.

use tracing::{info, warn};
use validator::Validate;

use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::utils::errors::{AppError, AppResult};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

/// Servicio de autenticación
#[derive(Debug, Clone)]
pub struct AuthService {
    username: String,
    password: String,
}

impl AuthService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            username: config.demo_username.clone(),
            password: config.demo_password.clone(),
        }
    }

    /// Validar campos y comparar con el par configurado
    pub fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let username = request.username.trim();
        if username != self.username || request.password != self.password {
            warn!("🔐 Login rechazado para '{}'", username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        info!("🔓 Login correcto: {}", username);
        Ok(LoginResponse::success(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(&EnvironmentConfig::default())
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_success() {
        let response = service().login(&request("supervisor", "12345")).unwrap();
        assert!(response.success);
        assert_eq!(response.username, "supervisor");
    }

    #[test]
    fn test_login_wrong_password() {
        match service().login(&request("supervisor", "wrong")) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_login_empty_fields() {
        match service().login(&request("", "")) {
            Err(AppError::Validation(errors)) => {
                let fields = errors.field_errors();
                let username = fields.get("username").unwrap();
                assert_eq!(
                    username[0].message.as_deref(),
                    Some("Email or username is required")
                );
                let password = fields.get("password").unwrap();
                assert_eq!(password[0].message.as_deref(), Some("Password is required"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_login_uses_configured_pair() {
        let config = EnvironmentConfig {
            demo_username: "controller".to_string(),
            demo_password: "secret".to_string(),
            ..Default::default()
        };
        let service = AuthService::new(&config);
        assert!(service.login(&request("controller", "secret")).is_ok());
        assert!(service.login(&request("supervisor", "12345")).is_err());
    }
}
