//! Utilidades de validación
//! 
//! Validadores custom usados por los derives de `validator`.

use validator::ValidationError;

/// Validar que un string no esté vacío (ignorando espacios)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
