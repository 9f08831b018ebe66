//! Modelos de la simulación de línea

use serde::Serialize;

/// Nivel de ocupación de una estación
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Moderate,
    High,
}

impl CrowdLevel {
    /// total > 70 → High, total >= 40 → Moderate, resto Low
    pub fn from_total(total: u32) -> Self {
        if total > 70 {
            CrowdLevel::High
        } else if total >= 40 {
            CrowdLevel::Moderate
        } else {
            CrowdLevel::Low
        }
    }
}

/// Estación de la línea
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub position: usize,
    pub exiting: u32,
    pub boarding: u32,
}

impl Station {
    pub fn new(id: &str, name: &str, position: usize) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            position,
            exiting: 0,
            boarding: 0,
        }
    }

    pub fn crowd_level(&self) -> CrowdLevel {
        CrowdLevel::from_total(self.exiting + self.boarding)
    }
}

/// Fase del tren simulado
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinePhase {
    Idle,
    Moving,
    Dwelling,
}

/// Estación tal como se expone en el snapshot
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StationView {
    #[serde(flatten)]
    pub station: Station,
    pub crowd_level: CrowdLevel,
}

/// Snapshot de la simulación
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSnapshot {
    pub current_station: usize,
    pub next_station: usize,
    pub phase: LinePhase,
    /// Progreso del tramo en curso (0.0 - 1.0)
    pub progress: f64,
    /// Posición sobre la línea completa (0.0 - 1.0)
    pub line_position: f64,
    pub status_message: String,
    pub stations: Vec<StationView>,
}
