//! Modelo de Train
//!
//! Este módulo contiene el struct Train y los estados cerrados que usa
//! el planificador de asignaciones. Los estados de fitness, limpieza y
//! branding se modelan como enums en lugar de texto libre.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Estado operativo del tren
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TrainStatus {
    Run,
    Standby,
    Maintenance,
}

impl TrainStatus {
    pub const ALL: [TrainStatus; 3] = [TrainStatus::Run, TrainStatus::Standby, TrainStatus::Maintenance];

    pub fn label(&self) -> &'static str {
        match self {
            TrainStatus::Run => "Run",
            TrainStatus::Standby => "Standby",
            TrainStatus::Maintenance => "Maintenance",
        }
    }

    /// Escala numérica usada por el gráfico de comparación (Run=3, Standby=2, Maintenance=1)
    pub fn chart_value(&self) -> u8 {
        match self {
            TrainStatus::Run => 3,
            TrainStatus::Standby => 2,
            TrainStatus::Maintenance => 1,
        }
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estado de fitness del tren
///
/// `Critical` existe como miembro explícito: el modo festival lo trata
/// como retirada inmediata y el modo normal lo agrupa con `Poor`.
/// Cualquier etiqueta que contenga "Requires" se lee como `RequiresInspection`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum FitnessStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Requires Inspection")]
    RequiresInspection,
    Critical,
}

impl FitnessStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FitnessStatus::Excellent => "Excellent",
            FitnessStatus::Good => "Good",
            FitnessStatus::Fair => "Fair",
            FitnessStatus::Poor => "Poor",
            FitnessStatus::RequiresInspection => "Requires Inspection",
            FitnessStatus::Critical => "Critical",
        }
    }
}

impl fmt::Display for FitnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FitnessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.contains("Requires") {
            return Ok(FitnessStatus::RequiresInspection);
        }
        match label.to_ascii_lowercase().as_str() {
            "excellent" => Ok(FitnessStatus::Excellent),
            "good" => Ok(FitnessStatus::Good),
            "fair" => Ok(FitnessStatus::Fair),
            "poor" => Ok(FitnessStatus::Poor),
            "critical" => Ok(FitnessStatus::Critical),
            _ => Err(format!("Estado de fitness desconocido: '{}'", s)),
        }
    }
}

impl TryFrom<String> for FitnessStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Estado de limpieza
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CleaningStatus {
    Clean,
    #[serde(rename = "Needs Cleaning")]
    NeedsCleaning,
}

impl CleaningStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CleaningStatus::Clean => "Clean",
            CleaningStatus::NeedsCleaning => "Needs Cleaning",
        }
    }
}

impl fmt::Display for CleaningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estado de branding (vinilado publicitario)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BrandingStatus {
    Complete,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
}

impl BrandingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BrandingStatus::Complete => "Complete",
            BrandingStatus::InProgress => "In Progress",
            BrandingStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for BrandingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Train principal - registro canónico de la flota
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Train {
    pub id: String,
    #[validate(length(min = 1))]
    pub train_id: String,
    pub status: TrainStatus,
    #[validate(range(min = 0.0))]
    pub mileage: f64,
    #[validate(range(min = 0.0))]
    pub branding_hours: f64,
    pub fitness_status: FitnessStatus,
    pub cleaning_status: CleaningStatus,
    pub branding_status: BrandingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_notes: Option<String>,
}
