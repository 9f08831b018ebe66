//! Modelo de JobCard
//!
//! Órdenes de trabajo asociadas a un tren por su ID de display.
//! La referencia al tren es débil: no se exige que exista.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tipo de tarea
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskType {
    Maintenance,
    Cleaning,
    Branding,
}

impl TaskType {
    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Maintenance => "Maintenance",
            TaskType::Cleaning => "Cleaning",
            TaskType::Branding => "Branding",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maintenance" => Ok(TaskType::Maintenance),
            "cleaning" => Ok(TaskType::Cleaning),
            "branding" => Ok(TaskType::Branding),
            _ => Err(format!("Tipo de tarea desconocido: '{}'", s)),
        }
    }
}

/// Prioridad de la tarea
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Prioridad desconocida: '{}'", s)),
        }
    }
}

/// Estado de la job card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JobCardStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl JobCardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JobCardStatus::Pending => "Pending",
            JobCardStatus::InProgress => "In Progress",
            JobCardStatus::Completed => "Completed",
        }
    }

    /// Clase CSS del badge en el reporte imprimible
    pub fn css_class(&self) -> &'static str {
        match self {
            JobCardStatus::Pending => "pending",
            JobCardStatus::InProgress => "in-progress",
            JobCardStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for JobCardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// JobCard principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobCard {
    pub id: u32,
    pub job_card_id: String,
    pub train_id: String,
    pub task_type: TaskType,
    pub priority: Priority,
    pub deadline: NaiveDate,
    pub status: JobCardStatus,
    pub description: String,
}

impl JobCard {
    /// ID de display: `JC-` + secuencia con padding a 3 dígitos
    pub fn display_id(sequence: u32) -> String {
        format!("JC-{:03}", sequence)
    }
}

/// Datos de alta de una job card. Los campos en `None` toman los
/// valores por defecto del store (ver `FleetRepository::add_job_card`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCardDraft {
    pub train_id: Option<String>,
    pub task_type: Option<TaskType>,
    pub priority: Option<Priority>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<JobCardStatus>,
    pub description: Option<String>,
}

/// Filtros de job cards (reportes). `None` equivale a "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCardFilters {
    pub train_id: Option<String>,
    pub task_type: Option<TaskType>,
    pub priority: Option<Priority>,
}

impl JobCardFilters {
    pub fn matches(&self, job_card: &JobCard) -> bool {
        if let Some(train_id) = &self.train_id {
            if train_id != "all" && &job_card.train_id != train_id {
                return false;
            }
        }
        if let Some(task_type) = self.task_type {
            if job_card.task_type != task_type {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if job_card.priority != priority {
                return false;
            }
        }
        true
    }
}
