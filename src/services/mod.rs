//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el
//! recomendador de asignaciones, el simulador what-if, las exportaciones,
//! las vistas del dashboard y la simulación de línea.

pub mod allocation_service;
pub mod analytics_service;
pub mod auth_service;
pub mod export_service;
pub mod line_simulation;
pub mod scheduler;
pub mod what_if_service;

pub use auth_service::AuthService;
pub use scheduler::{ImmediateScheduler, Scheduler, TokioScheduler, VirtualScheduler};
