use chrono::Utc;
use tracing::info;

use crate::dto::job_card_dto::JobCardQuery;
use crate::models::analytics::{ChartsResponse, DashboardSummary, TimelineResponse};
use crate::models::job_card::{JobCard, JobCardFilters};
use crate::models::train::Train;
use crate::services::{analytics_service, export_service};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

/// Archivo CSV listo para descargar
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

pub struct ReportController {
    state: AppState,
}

impl ReportController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn summary(&self) -> DashboardSummary {
        let mode = self.state.current_mode().await;
        let fleet = self.state.fleet.read().await;
        analytics_service::dashboard_summary(
            fleet.trains(),
            fleet.job_cards(),
            mode,
            Utc::now().date_naive(),
        )
    }

    pub async fn charts(&self) -> ChartsResponse {
        let mode = self.state.current_mode().await;
        let fleet = self.state.fleet.read().await;
        analytics_service::charts(fleet.trains(), mode)
    }

    pub async fn timeline(&self, query: JobCardQuery) -> Result<TimelineResponse, AppError> {
        let filters = JobCardFilters::try_from(query)?;
        let fleet = self.state.fleet.read().await;
        let filtered = fleet.filter_job_cards(&filters);
        Ok(analytics_service::timeline(
            filtered,
            fleet.job_cards().len(),
            Utc::now().date_naive(),
        ))
    }

    /// Job cards filtradas y flota para exportar; vacío es un error
    async fn export_data(&self, query: JobCardQuery) -> Result<(Vec<JobCard>, Vec<Train>), AppError> {
        let filters = JobCardFilters::try_from(query)?;
        let fleet = self.state.fleet.read().await;
        let job_cards = fleet.filter_job_cards(&filters);
        if job_cards.is_empty() {
            return Err(bad_request_error("No job cards match the selected filters"));
        }
        Ok((job_cards, fleet.trains().to_vec()))
    }

    pub async fn export_csv(&self, query: JobCardQuery) -> Result<CsvExport, AppError> {
        let (job_cards, _) = self.export_data(query).await?;
        info!("📄 Exportando {} job cards a CSV", job_cards.len());
        Ok(CsvExport {
            filename: export_service::csv_filename(Utc::now().date_naive()),
            content: export_service::job_cards_to_csv(&job_cards),
        })
    }

    pub async fn export_html(&self, query: JobCardQuery) -> Result<String, AppError> {
        let (job_cards, trains) = self.export_data(query).await?;
        info!("🖨️ Generando reporte imprimible con {} job cards", job_cards.len());
        Ok(export_service::render_print_report(&job_cards, &trains, Utc::now()))
    }
}
