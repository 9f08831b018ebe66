use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Login request de la pantalla de acceso
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "Email or username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "Password is required"))]
    pub password: String,
}

// Login response (sin token: solo confirma las credenciales)
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub username: String,
    pub message: String,
}

impl LoginResponse {
    pub fn success(username: String) -> Self {
        Self {
            success: true,
            username,
            message: "Login successful".to_string(),
        }
    }
}
