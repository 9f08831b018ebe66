//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos de la flota, las job cards,
//! las recomendaciones del planificador y las vistas derivadas.

pub mod train;
pub mod job_card;
pub mod allocation;
pub mod analytics;
pub mod line;
