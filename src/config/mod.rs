//! Configuración del proyecto
//! 
//! Este módulo contiene las variables de entorno y la configuración
//! de tiempos del sistema.

pub mod environment;

pub use environment::*;
