use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::allocation::{AllocationRecommendation, AllocationSummary, OperationMode};
use crate::models::train::Train;
use crate::services::what_if_service::{WhatIfOverrides, WhatIfScenario};
use crate::utils::validation::validate_not_blank;

/// Flota sobre la que corre el planificador
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FleetSource {
    #[default]
    Canonical,
    Simulated,
}

// Query del planificador: `?mode=festival&source=simulated`
#[derive(Debug, Default, Deserialize)]
pub struct PlannerQuery {
    pub mode: Option<OperationMode>,
    pub source: Option<FleetSource>,
}

#[derive(Debug, Serialize)]
pub struct PlannerResponse {
    pub mode: OperationMode,
    pub source: FleetSource,
    pub summary: AllocationSummary,
    pub recommendations: Vec<AllocationRecommendation>,
}

// Request del simulador what-if
#[derive(Debug, Deserialize, Validate)]
pub struct WhatIfRequest {
    #[validate(custom(function = "validate_not_blank", message = "Train is required"))]
    pub train_id: String,
    #[serde(flatten)]
    pub overrides: WhatIfOverrides,
}

// Resultado de aplicar un escenario: el planificador corre sobre la flota simulada
#[derive(Debug, Serialize)]
pub struct WhatIfApplyResponse {
    #[serde(flatten)]
    pub scenario: WhatIfScenario,
    pub mode: OperationMode,
    pub summary: AllocationSummary,
    pub recommendations: Vec<AllocationRecommendation>,
}

// Vista actual del simulador
#[derive(Debug, Serialize)]
pub struct WhatIfResponse {
    pub active: bool,
    pub scenario: Option<WhatIfScenario>,
    pub trains: Vec<Train>,
}

// Request para fijar el modo
#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub festival: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ModeResponse {
    pub mode: OperationMode,
    pub festival: bool,
}

impl From<OperationMode> for ModeResponse {
    fn from(mode: OperationMode) -> Self {
        Self {
            mode,
            festival: mode.is_festival(),
        }
    }
}
