use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;
use validator::Validate;

use crate::models::job_card::{JobCardDraft, JobCardFilters, JobCardStatus, Priority, TaskType};
use crate::utils::errors::AppError;

// Request para crear una job card; todo es opcional
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateJobCardRequest {
    #[validate(length(min = 1, max = 20))]
    pub train_id: Option<String>,
    pub task_type: Option<TaskType>,
    pub priority: Option<Priority>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<JobCardStatus>,
    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,
}

impl From<CreateJobCardRequest> for JobCardDraft {
    fn from(request: CreateJobCardRequest) -> Self {
        Self {
            train_id: request.train_id,
            task_type: request.task_type,
            priority: request.priority,
            deadline: request.deadline,
            status: request.status,
            description: request.description,
        }
    }
}

// Query de filtros tal como llega en la URL (`all` = sin filtro)
#[derive(Debug, Default, Deserialize)]
pub struct JobCardQuery {
    pub train_id: Option<String>,
    pub task_type: Option<String>,
    pub priority: Option<String>,
}

fn parse_filter<T: FromStr<Err = String>>(raw: Option<String>) -> Result<Option<T>, AppError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("all") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(AppError::BadRequest),
    }
}

impl TryFrom<JobCardQuery> for JobCardFilters {
    type Error = AppError;

    fn try_from(query: JobCardQuery) -> Result<Self, Self::Error> {
        let train_id = query
            .train_id
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("all"));

        Ok(Self {
            train_id,
            task_type: parse_filter(query.task_type)?,
            priority: parse_filter(query.priority)?,
        })
    }
}
