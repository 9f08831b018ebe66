use chrono::{Duration, NaiveDate};
use tracing::{info, warn};

use crate::models::job_card::{
    JobCard, JobCardDraft, JobCardFilters, JobCardStatus, Priority, TaskType,
};
use crate::models::train::Train;
use crate::repositories::seed;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

/// Días hasta el deadline por defecto de una job card nueva
pub const DEFAULT_DEADLINE_DAYS: i64 = 7;

/// Store en memoria de la flota y sus job cards
///
/// Los trenes son de solo lectura; las overrides del what-if trabajan
/// sobre copias. Solo las job cards admiten alta y baja.
#[derive(Debug, Clone)]
pub struct FleetRepository {
    trains: Vec<Train>,
    job_cards: Vec<JobCard>,
    next_job_card_id: u32,
}

impl FleetRepository {
    pub fn new(trains: Vec<Train>, job_cards: Vec<JobCard>) -> Self {
        let next_job_card_id = job_cards.iter().map(|jc| jc.id).max().unwrap_or(0) + 1;
        Self {
            trains,
            job_cards,
            next_job_card_id,
        }
    }

    /// Store inicial con los datos semilla; los deadlines son relativos a `today`
    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed::seed_trains(), seed::seed_job_cards(today))
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn find_train(&self, train_id: &str) -> Option<&Train> {
        self.trains.iter().find(|t| t.train_id == train_id)
    }

    pub fn job_cards(&self) -> &[JobCard] {
        &self.job_cards
    }

    pub fn filter_job_cards(&self, filters: &JobCardFilters) -> Vec<JobCard> {
        self.job_cards
            .iter()
            .filter(|jc| filters.matches(jc))
            .cloned()
            .collect()
    }

    /// Alta de job card con ID secuencial
    ///
    /// Defaults: primer tren de la flota, Maintenance, Medium,
    /// deadline = today + 7 días, Pending, "New task".
    pub fn add_job_card(&mut self, draft: JobCardDraft, today: NaiveDate) -> AppResult<JobCard> {
        let train_id = match draft.train_id {
            Some(train_id) => train_id,
            None => self
                .trains
                .first()
                .map(|t| t.train_id.clone())
                .ok_or_else(|| bad_request_error("No hay trenes en la flota para asignar la job card"))?,
        };

        if self.find_train(&train_id).is_none() {
            warn!("⚠️ Job card asignada a un tren inexistente: {}", train_id);
        }

        let id = self.next_job_card_id;
        self.next_job_card_id += 1;

        let job_card = JobCard {
            id,
            job_card_id: JobCard::display_id(id),
            train_id,
            task_type: draft.task_type.unwrap_or(TaskType::Maintenance),
            priority: draft.priority.unwrap_or(Priority::Medium),
            deadline: draft
                .deadline
                .unwrap_or(today + Duration::days(DEFAULT_DEADLINE_DAYS)),
            status: draft.status.unwrap_or(JobCardStatus::Pending),
            description: draft.description.unwrap_or_else(|| "New task".to_string()),
        };

        info!("📝 Job card {} creada para {}", job_card.job_card_id, job_card.train_id);
        self.job_cards.push(job_card.clone());
        Ok(job_card)
    }

    /// Baja por ID; la colección no cambia si no existe
    pub fn delete_job_card(&mut self, id: u32) -> AppResult<JobCard> {
        let position = self
            .job_cards
            .iter()
            .position(|jc| jc.id == id)
            .ok_or_else(|| not_found_error("Job card", &id.to_string()))?;

        let removed = self.job_cards.remove(position);
        info!("🗑️ Job card {} eliminada", removed.job_card_id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_add_job_card_defaults() {
        let mut repo = FleetRepository::seeded(today());
        assert_eq!(repo.job_cards().len(), 3);

        let card = repo.add_job_card(JobCardDraft::default(), today()).unwrap();
        assert_eq!(card.job_card_id, "JC-004");
        assert_eq!(card.id, 4);
        assert_eq!(card.status, JobCardStatus::Pending);
        assert_eq!(card.task_type, TaskType::Maintenance);
        assert_eq!(card.priority, Priority::Medium);
        assert_eq!(card.deadline, NaiveDate::from_ymd_opt(2026, 10, 23).unwrap());
        assert_eq!(card.train_id, repo.trains()[0].train_id);
        assert_eq!(card.description, "New task");
        assert_eq!(repo.job_cards().len(), 4);
    }

    #[test]
    fn test_add_job_card_overrides() {
        let mut repo = FleetRepository::seeded(today());
        let draft = JobCardDraft {
            train_id: Some("KM-05".to_string()),
            task_type: Some(TaskType::Branding),
            priority: Some(Priority::High),
            description: Some("Festival wrap".to_string()),
            ..Default::default()
        };

        let card = repo.add_job_card(draft, today()).unwrap();
        assert_eq!(card.train_id, "KM-05");
        assert_eq!(card.task_type, TaskType::Branding);
        assert_eq!(card.priority, Priority::High);
        assert_eq!(card.description, "Festival wrap");
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        let mut repo = FleetRepository::seeded(today());
        repo.delete_job_card(2).unwrap();

        let card = repo.add_job_card(JobCardDraft::default(), today()).unwrap();
        assert_eq!(card.job_card_id, "JC-004");
        let ids: Vec<u32> = repo.job_cards().iter().map(|jc| jc.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_delete_job_card() {
        let mut repo = FleetRepository::seeded(today());

        let removed = repo.delete_job_card(1).unwrap();
        assert_eq!(removed.job_card_id, "JC-001");
        assert_eq!(repo.job_cards().len(), 2);

        let before = repo.job_cards().to_vec();
        let result = repo.delete_job_card(99);
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(repo.job_cards(), before.as_slice());
    }

    #[test]
    fn test_add_without_trains() {
        let mut repo = FleetRepository::new(Vec::new(), Vec::new());
        let result = repo.add_job_card(JobCardDraft::default(), today());
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let draft = JobCardDraft { train_id: Some("KM-77".to_string()), ..Default::default() };
        let card = repo.add_job_card(draft, today()).unwrap();
        assert_eq!(card.job_card_id, "JC-001");
    }

    #[test]
    fn test_find_train() {
        let repo = FleetRepository::seeded(today());
        assert!(repo.find_train("KM-01").is_some());
        assert!(repo.find_train("KM-99").is_none());
    }
}
