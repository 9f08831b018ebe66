//! Modelos de Analytics
//! 
//! Este módulo contiene los modelos para las tarjetas de resumen,
//! las series de los gráficos y el timeline de job cards.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::allocation::OperationMode;
use crate::models::job_card::JobCard;

/// Resumen para dashboard
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub mode: OperationMode,

    // Resumen de flota
    pub total_trains: usize,
    pub active_trains: usize,
    pub standby_trains: usize,
    pub maintenance_trains: usize,

    // Resumen de job cards
    pub pending_job_cards: usize,
}

/// Punto de la serie de kilometraje
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MileagePoint {
    pub name: String,
    pub mileage: f64,
}

/// Porción del gráfico de distribución por estado
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusSlice {
    pub name: String,
    pub value: usize,
}

/// Comparación estado actual vs sugerido (escala 3/2/1)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AllocationComparisonPoint {
    pub name: String,
    pub actual: u8,
    pub suggested: u8,
}

/// Series para los gráficos del dashboard y de reportes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartsResponse {
    pub mode: OperationMode,
    pub mileage: Vec<MileagePoint>,
    pub status_distribution: Vec<StatusSlice>,
    pub allocation_comparison: Vec<AllocationComparisonPoint>,
}

/// Entrada del timeline de job cards
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub job_card: JobCard,
    pub days_until_deadline: i64,
    pub urgent: bool,
}

/// Timeline filtrado
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineResponse {
    pub showing: usize,
    pub total: usize,
    pub entries: Vec<TimelineEntry>,
}
