//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las claves tienen un valor por defecto; solo falla si un valor
//! presente no se puede parsear.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    // Retardos cosméticos del dashboard
    pub planner_delay_ms: u64,
    pub simulation_delay_ms: u64,
    // Simulación de línea
    pub line_cycle_ms: u64,
    pub line_travel_ms: u64,
    pub line_dwell_ms: u64,
    pub line_steps: u32,
    // Credenciales demo de la pantalla de login
    pub demo_username: String,
    pub demo_password: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
            planner_delay_ms: 2000,
            simulation_delay_ms: 1000,
            line_cycle_ms: 6000,
            line_travel_ms: 2000,
            line_dwell_ms: 2000,
            line_steps: 60,
            demo_username: "supervisor".to_string(),
            demo_password: "12345".to_string(),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value (got '{}')", key, raw)),
        Err(_) => Ok(default),
    }
}

impl EnvironmentConfig {
    /// Cargar configuración desde el entorno del proceso
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let line_steps: u32 = env_or("LINE_STEPS", defaults.line_steps)?;
        if line_steps == 0 {
            anyhow::bail!("LINE_STEPS must be greater than zero");
        }

        Ok(Self {
            environment: env_or("ENVIRONMENT", defaults.environment)?,
            port: env_or("PORT", defaults.port)?,
            host: env_or("HOST", defaults.host)?,
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?,
            planner_delay_ms: env_or("PLANNER_DELAY_MS", defaults.planner_delay_ms)?,
            simulation_delay_ms: env_or("SIMULATION_DELAY_MS", defaults.simulation_delay_ms)?,
            line_cycle_ms: env_or("LINE_CYCLE_MS", defaults.line_cycle_ms)?,
            line_travel_ms: env_or("LINE_TRAVEL_MS", defaults.line_travel_ms)?,
            line_dwell_ms: env_or("LINE_DWELL_MS", defaults.line_dwell_ms)?,
            line_steps,
            demo_username: env_or("DEMO_USERNAME", defaults.demo_username)?,
            demo_password: env_or("DEMO_PASSWORD", defaults.demo_password)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn planner_delay(&self) -> Duration {
        Duration::from_millis(self.planner_delay_ms)
    }

    pub fn simulation_delay(&self) -> Duration {
        Duration::from_millis(self.simulation_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_timings() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.planner_delay(), Duration::from_secs(2));
        assert_eq!(config.simulation_delay(), Duration::from_secs(1));
        assert_eq!(config.line_steps, 60);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert!(config.is_development());
    }
}
