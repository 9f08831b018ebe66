//! Modelos del planificador de asignaciones

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::train::TrainStatus;

/// Modo de operación global
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    #[default]
    Normal,
    Festival,
}

impl OperationMode {
    pub fn from_festival_flag(festival: bool) -> Self {
        if festival {
            OperationMode::Festival
        } else {
            OperationMode::Normal
        }
    }

    pub fn is_festival(&self) -> bool {
        matches!(self, OperationMode::Festival)
    }

    pub fn toggled(&self) -> Self {
        match self {
            OperationMode::Normal => OperationMode::Festival,
            OperationMode::Festival => OperationMode::Normal,
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationMode::Normal => f.write_str("normal"),
            OperationMode::Festival => f.write_str("festival"),
        }
    }
}

/// Identificador estable de la regla que produjo la sugerencia
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AllocationRule {
    // Modo normal
    MileageLimit,
    FitnessDegraded,
    ServicingIncomplete,
    LowMileageExcellent,
    KeepRunning,
    DefaultStandby,
    // Modo festival
    FestivalSafetyLimit,
    FestivalWornOut,
    FestivalDeferCleaning,
    FestivalActivateStandby,
    FestivalLowMileageExcellent,
    FestivalKeepRunning,
    FestivalDefaultRun,
}

/// Recomendación derivada - no se persiste, se recalcula en cada consulta
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationRecommendation {
    pub train_id: String,
    pub current_status: TrainStatus,
    pub suggested_status: TrainStatus,
    pub confidence: u8,
    pub rule: AllocationRule,
    pub changed: bool,
}

/// Resumen de una corrida del planificador
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AllocationSummary {
    pub run: usize,
    pub standby: usize,
    pub maintenance: usize,
    pub changes: usize,
}
