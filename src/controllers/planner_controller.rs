use tracing::info;

use crate::dto::planner_dto::{FleetSource, PlannerQuery, PlannerResponse};
use crate::services::allocation_service;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct PlannerController {
    state: AppState,
}

impl PlannerController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Recomendaciones tras el retardo de "análisis" del planificador
    pub async fn recommendations(&self, query: PlannerQuery) -> Result<PlannerResponse, AppError> {
        let mode = match query.mode {
            Some(mode) => mode,
            None => self.state.current_mode().await,
        };
        let source = query.source.unwrap_or_default();

        self.state.scheduler.sleep(self.state.config.planner_delay()).await;

        let trains = {
            let fleet = self.state.fleet.read().await;
            match source {
                FleetSource::Canonical => fleet.trains().to_vec(),
                FleetSource::Simulated => self.state.what_if.read().await.view(fleet.trains()),
            }
        };

        let recommendations = allocation_service::recommend_fleet(&trains, mode);
        let summary = allocation_service::summarize(&recommendations);
        info!(
            "🧠 Planificador ({}, {:?}): {} cambios sugeridos",
            mode, source, summary.changes
        );

        Ok(PlannerResponse {
            mode,
            source,
            summary,
            recommendations,
        })
    }
}
