use chrono::Utc;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::job_card_dto::{CreateJobCardRequest, JobCardQuery};
use crate::models::job_card::{JobCard, JobCardFilters};
use crate::models::train::Train;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub struct FleetController {
    state: AppState,
}

impl FleetController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn list_trains(&self) -> Vec<Train> {
        self.state.fleet.read().await.trains().to_vec()
    }

    pub async fn get_train(&self, train_id: &str) -> Result<Train, AppError> {
        self.state
            .fleet
            .read()
            .await
            .find_train(train_id)
            .cloned()
            .ok_or_else(|| not_found_error("Train", train_id))
    }

    pub async fn list_job_cards(&self, query: JobCardQuery) -> Result<Vec<JobCard>, AppError> {
        let filters = JobCardFilters::try_from(query)?;
        Ok(self.state.fleet.read().await.filter_job_cards(&filters))
    }

    pub async fn create_job_card(
        &self,
        request: CreateJobCardRequest,
    ) -> Result<ApiResponse<JobCard>, AppError> {
        request.validate()?;

        let today = Utc::now().date_naive();
        let job_card = self
            .state
            .fleet
            .write()
            .await
            .add_job_card(request.into(), today)?;

        let message = format!("Job card {} created", job_card.job_card_id);
        Ok(ApiResponse::success_with_message(job_card, message))
    }

    pub async fn delete_job_card(&self, id: u32) -> Result<ApiResponse<JobCard>, AppError> {
        let removed = self.state.fleet.write().await.delete_job_card(id)?;
        let message = format!("Job card {} deleted", removed.job_card_id);
        Ok(ApiResponse::success_with_message(removed, message))
    }
}
