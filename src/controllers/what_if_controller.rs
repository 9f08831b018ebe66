use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::planner_dto::{WhatIfApplyResponse, WhatIfRequest, WhatIfResponse};
use crate::services::allocation_service;
use crate::services::what_if_service::{self, WhatIfScenario};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct WhatIfController {
    state: AppState,
}

impl WhatIfController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Vista actual: simulada si hay escenario, si no la canónica
    pub async fn current(&self) -> WhatIfResponse {
        let fleet = self.state.fleet.read().await;
        let session = self.state.what_if.read().await;
        WhatIfResponse {
            active: session.is_active(),
            scenario: session.scenario().cloned(),
            trains: session.view(fleet.trains()),
        }
    }

    /// Aplicar overrides y recalcular el planificador sobre la flota simulada
    pub async fn apply(&self, request: WhatIfRequest) -> Result<ApiResponse<WhatIfApplyResponse>, AppError> {
        request.validate()?;

        let mode = self.state.current_mode().await;
        self.state.scheduler.sleep(self.state.config.simulation_delay()).await;

        let train_id = request.train_id.trim().to_string();
        let trains = {
            let fleet = self.state.fleet.read().await;
            what_if_service::apply_overrides(fleet.trains(), &train_id, request.overrides)?
        };

        let recommendations = allocation_service::recommend_fleet(&trains, mode);
        let summary = allocation_service::summarize(&recommendations);

        let scenario = WhatIfScenario {
            train_id,
            overrides: request.overrides,
            trains,
        };
        self.state.what_if.write().await.set(scenario.clone());

        Ok(ApiResponse::success_with_message(
            WhatIfApplyResponse {
                scenario,
                mode,
                summary,
                recommendations,
            },
            "Simulation applied".to_string(),
        ))
    }

    pub async fn reset(&self) -> ApiResponse<WhatIfResponse> {
        self.state.what_if.write().await.reset();
        ApiResponse::success_with_message(self.current().await, "Simulation reset".to_string())
    }
}
