//! Vistas derivadas para el dashboard y los reportes

use chrono::NaiveDate;

use crate::models::allocation::OperationMode;
use crate::models::analytics::{
    AllocationComparisonPoint, ChartsResponse, DashboardSummary, MileagePoint, StatusSlice,
    TimelineEntry, TimelineResponse,
};
use crate::models::job_card::{JobCard, JobCardStatus};
use crate::models::train::{Train, TrainStatus};
use crate::services::allocation_service;

/// Trenes mostrados en el gráfico de comparación
pub const COMPARISON_LIMIT: usize = 8;

/// Días restantes para considerar urgente una job card abierta
pub const URGENT_WITHIN_DAYS: i64 = 2;

pub fn dashboard_summary(
    trains: &[Train],
    job_cards: &[JobCard],
    mode: OperationMode,
    today: NaiveDate,
) -> DashboardSummary {
    let count = |status: TrainStatus| trains.iter().filter(|t| t.status == status).count();

    DashboardSummary {
        date: today,
        mode,
        total_trains: trains.len(),
        active_trains: count(TrainStatus::Run),
        standby_trains: count(TrainStatus::Standby),
        maintenance_trains: count(TrainStatus::Maintenance),
        pending_job_cards: job_cards
            .iter()
            .filter(|jc| jc.status == JobCardStatus::Pending)
            .count(),
    }
}

pub fn charts(trains: &[Train], mode: OperationMode) -> ChartsResponse {
    let mileage = trains
        .iter()
        .map(|t| MileagePoint {
            name: t.train_id.clone(),
            mileage: t.mileage,
        })
        .collect();

    let status_distribution = TrainStatus::ALL
        .iter()
        .map(|status| StatusSlice {
            name: status.label().to_string(),
            value: trains.iter().filter(|t| t.status == *status).count(),
        })
        .collect();

    let allocation_comparison = trains
        .iter()
        .take(COMPARISON_LIMIT)
        .map(|t| {
            let rec = allocation_service::recommend(t, mode);
            AllocationComparisonPoint {
                name: t.train_id.clone(),
                actual: rec.current_status.chart_value(),
                suggested: rec.suggested_status.chart_value(),
            }
        })
        .collect();

    ChartsResponse {
        mode,
        mileage,
        status_distribution,
        allocation_comparison,
    }
}

pub fn timeline_entry(job_card: JobCard, today: NaiveDate) -> TimelineEntry {
    let days_until_deadline = (job_card.deadline - today).num_days();
    let urgent = days_until_deadline <= URGENT_WITHIN_DAYS && job_card.status != JobCardStatus::Completed;
    TimelineEntry {
        job_card,
        days_until_deadline,
        urgent,
    }
}

/// Timeline de las job cards filtradas; `total` es el tamaño sin filtrar
pub fn timeline(filtered: Vec<JobCard>, total: usize, today: NaiveDate) -> TimelineResponse {
    let entries: Vec<TimelineEntry> = filtered
        .into_iter()
        .map(|jc| timeline_entry(jc, today))
        .collect();

    TimelineResponse {
        showing: entries.len(),
        total,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::seed::{seed_job_cards, seed_trains};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_dashboard_summary() {
        let summary = dashboard_summary(&seed_trains(), &seed_job_cards(today()), OperationMode::Normal, today());
        assert_eq!(summary.total_trains, 10);
        assert_eq!(summary.active_trains, 5);
        assert_eq!(summary.standby_trains, 3);
        assert_eq!(summary.maintenance_trains, 2);
        assert_eq!(summary.pending_job_cards, 2);
    }

    #[test]
    fn test_charts_series() {
        let trains = seed_trains();
        let charts = charts(&trains, OperationMode::Normal);

        assert_eq!(charts.mileage.len(), 10);
        assert_eq!(charts.mileage[0], MileagePoint { name: "KM-01".to_string(), mileage: 45_200.0 });

        let names: Vec<&str> = charts.status_distribution.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Run", "Standby", "Maintenance"]);
        assert_eq!(charts.status_distribution[0].value, 5);

        assert_eq!(charts.allocation_comparison.len(), COMPARISON_LIMIT);
        // KM-04: Maintenance con 67800 km → sigue en Maintenance
        assert_eq!(charts.allocation_comparison[3].actual, 1);
        assert_eq!(charts.allocation_comparison[3].suggested, 1);
        // KM-03: Standby que necesita limpieza → Standby
        assert_eq!(charts.allocation_comparison[2].suggested, 2);
    }

    #[test]
    fn test_charts_follow_mode() {
        let trains = seed_trains();
        let festival = charts(&trains, OperationMode::Festival);
        // KM-03 pasa a Run en modo festival (limpieza diferida)
        assert_eq!(festival.allocation_comparison[2].suggested, 3);
    }

    #[test]
    fn test_timeline_urgency() {
        let mut cards = seed_job_cards(today());
        cards[2].deadline = today() + Duration::days(3);
        cards[1].status = JobCardStatus::Completed;

        let response = timeline(cards, 5, today());
        assert_eq!(response.showing, 3);
        assert_eq!(response.total, 5);

        assert_eq!(response.entries[0].days_until_deadline, 2);
        assert!(response.entries[0].urgent);
        assert!(!response.entries[1].urgent);
        assert!(!response.entries[2].urgent);
    }

    #[test]
    fn test_overdue_is_urgent() {
        let mut card = seed_job_cards(today()).remove(0);
        card.deadline = today() - Duration::days(4);
        let entry = timeline_entry(card, today());
        assert_eq!(entry.days_until_deadline, -4);
        assert!(entry.urgent);
    }
}
