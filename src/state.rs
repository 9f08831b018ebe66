//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Cada store vive tras su propio `RwLock`;
//! ningún lock se mantiene durante un sleep del scheduler.

use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::allocation::OperationMode;
use crate::repositories::fleet_repository::FleetRepository;
use crate::services::line_simulation::{default_stations, LineSimulation, LineTiming};
use crate::services::scheduler::Scheduler;
use crate::services::what_if_service::WhatIfSession;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub fleet: Arc<RwLock<FleetRepository>>,
    pub what_if: Arc<RwLock<WhatIfSession>>,
    pub mode: Arc<RwLock<OperationMode>>,
    pub line: Arc<RwLock<LineSimulation>>,
    pub scheduler: Arc<dyn Scheduler>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        fleet: FleetRepository,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        let timing = LineTiming::from_config(&config);
        Self {
            config,
            fleet: Arc::new(RwLock::new(fleet)),
            what_if: Arc::new(RwLock::new(WhatIfSession::new())),
            mode: Arc::new(RwLock::new(OperationMode::default())),
            line: Arc::new(RwLock::new(LineSimulation::new(default_stations(), timing.steps))),
            scheduler,
        }
    }

    /// Estado con la flota semilla
    pub fn seeded(config: EnvironmentConfig, today: NaiveDate, scheduler: Arc<dyn Scheduler>) -> Self {
        Self::new(config, FleetRepository::seeded(today), scheduler)
    }

    /// Modo de operación actual
    pub async fn current_mode(&self) -> OperationMode {
        *self.mode.read().await
    }

    pub fn line_timing(&self) -> LineTiming {
        LineTiming::from_config(&self.config)
    }
}
