//! Repositorios en memoria

pub mod fleet_repository;
pub mod seed;
