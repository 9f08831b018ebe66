//! DTOs de la API HTTP
//!
//! Requests y responses propios de los endpoints; los modelos de
//! dominio viven en `models`.

pub mod auth_dto;
pub mod common_dto;
pub mod job_card_dto;
pub mod planner_dto;
