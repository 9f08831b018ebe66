//! Datos semilla de la flota
//!
//! Cargados al arrancar el proceso; no hay persistencia.

use chrono::{Duration, NaiveDate};

use crate::models::job_card::{JobCard, JobCardStatus, Priority, TaskType};
use crate::models::train::{BrandingStatus, CleaningStatus, FitnessStatus, Train, TrainStatus};

#[allow(clippy::too_many_arguments)]
fn train(
    id: u32,
    status: TrainStatus,
    mileage: f64,
    branding_hours: f64,
    fitness_status: FitnessStatus,
    cleaning_status: CleaningStatus,
    branding_status: BrandingStatus,
    reason_notes: Option<&str>,
) -> Train {
    Train {
        id: id.to_string(),
        train_id: format!("KM-{:02}", id),
        status,
        mileage,
        branding_hours,
        fitness_status,
        cleaning_status,
        branding_status,
        reason_notes: reason_notes.map(str::to_string),
    }
}

pub fn seed_trains() -> Vec<Train> {
    use BrandingStatus as B;
    use CleaningStatus as C;
    use FitnessStatus as F;
    use TrainStatus as S;

    vec![
        train(1, S::Run, 45_200.0, 320.0, F::Excellent, C::Clean, B::Complete, None),
        train(2, S::Run, 58_700.0, 280.0, F::Good, C::Clean, B::Complete, None),
        train(3, S::Standby, 52_300.0, 150.0, F::Good, C::NeedsCleaning, B::Complete, Some("Interior cleaning scheduled at Muttom depot")),
        train(4, S::Maintenance, 67_800.0, 90.0, F::Poor, C::Clean, B::Pending, Some("Bogie inspection overdue")),
        train(5, S::Run, 38_900.0, 410.0, F::Excellent, C::Clean, B::Complete, None),
        train(6, S::Standby, 49_500.0, 60.0, F::Fair, C::Clean, B::InProgress, Some("Festival livery being applied")),
        train(7, S::Maintenance, 72_100.0, 20.0, F::RequiresInspection, C::NeedsCleaning, B::Pending, Some("Traction motor noise reported")),
        train(8, S::Run, 61_200.0, 350.0, F::Good, C::Clean, B::Complete, None),
        train(9, S::Standby, 33_400.0, 200.0, F::Excellent, C::Clean, B::Complete, None),
        train(10, S::Run, 55_600.0, 275.0, F::Good, C::NeedsCleaning, B::Complete, None),
    ]
}

pub fn seed_job_cards(today: NaiveDate) -> Vec<JobCard> {
    vec![
        JobCard {
            id: 1,
            job_card_id: JobCard::display_id(1),
            train_id: "KM-04".to_string(),
            task_type: TaskType::Maintenance,
            priority: Priority::High,
            deadline: today + Duration::days(2),
            status: JobCardStatus::Pending,
            description: "Bogie inspection and brake pad replacement".to_string(),
        },
        JobCard {
            id: 2,
            job_card_id: JobCard::display_id(2),
            train_id: "KM-03".to_string(),
            task_type: TaskType::Cleaning,
            priority: Priority::Medium,
            deadline: today + Duration::days(1),
            status: JobCardStatus::InProgress,
            description: "Interior deep cleaning".to_string(),
        },
        JobCard {
            id: 3,
            job_card_id: JobCard::display_id(3),
            train_id: "KM-06".to_string(),
            task_type: TaskType::Branding,
            priority: Priority::Low,
            deadline: today + Duration::days(5),
            status: JobCardStatus::Pending,
            description: "Apply festival livery wrap".to_string(),
        },
    ]
}
