//! Planificador de asignaciones
//!
//! Cascada de reglas ordenadas: la primera que aplica gana. Las
//! confianzas son constantes por rama, no se calculan.
//!
//! El modo (normal / festival) se recibe como parámetro explícito;
//! este módulo no lee estado global.

use tracing::debug;

use crate::models::allocation::{
    AllocationRecommendation, AllocationRule, AllocationSummary, OperationMode,
};
use crate::models::train::{BrandingStatus, CleaningStatus, FitnessStatus, Train, TrainStatus};

/// Resultado de evaluar la cascada sobre un tren
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub status: TrainStatus,
    pub confidence: u8,
    pub rule: AllocationRule,
}

impl RuleOutcome {
    const fn new(status: TrainStatus, confidence: u8, rule: AllocationRule) -> Self {
        Self { status, confidence, rule }
    }
}

fn fitness_degraded(fitness: FitnessStatus) -> bool {
    matches!(
        fitness,
        FitnessStatus::Poor | FitnessStatus::RequiresInspection | FitnessStatus::Critical
    )
}

/// Cascada del modo normal
pub fn evaluate_normal(train: &Train) -> RuleOutcome {
    use AllocationRule::*;

    if train.mileage > 60_000.0 {
        RuleOutcome::new(TrainStatus::Maintenance, 95, MileageLimit)
    } else if fitness_degraded(train.fitness_status) {
        RuleOutcome::new(TrainStatus::Maintenance, 88, FitnessDegraded)
    } else if train.cleaning_status == CleaningStatus::NeedsCleaning
        || train.branding_status != BrandingStatus::Complete
    {
        RuleOutcome::new(TrainStatus::Standby, 82, ServicingIncomplete)
    } else if train.mileage < 50_000.0 && train.fitness_status == FitnessStatus::Excellent {
        RuleOutcome::new(TrainStatus::Run, 92, LowMileageExcellent)
    } else if train.status == TrainStatus::Run {
        RuleOutcome::new(TrainStatus::Run, 85, KeepRunning)
    } else {
        RuleOutcome::new(TrainStatus::Standby, 75, DefaultStandby)
    }
}

/// Cascada del modo festival: maximiza trenes en servicio
pub fn evaluate_festival(train: &Train) -> RuleOutcome {
    use AllocationRule::*;

    if train.mileage > 70_000.0 || train.fitness_status == FitnessStatus::Critical {
        RuleOutcome::new(TrainStatus::Maintenance, 96, FestivalSafetyLimit)
    } else if train.fitness_status == FitnessStatus::Poor && train.mileage > 65_000.0 {
        RuleOutcome::new(TrainStatus::Maintenance, 85, FestivalWornOut)
    } else if train.cleaning_status == CleaningStatus::NeedsCleaning && train.mileage < 55_000.0 {
        RuleOutcome::new(TrainStatus::Run, 88, FestivalDeferCleaning)
    } else if train.status == TrainStatus::Standby && train.mileage < 60_000.0 {
        RuleOutcome::new(TrainStatus::Run, 92, FestivalActivateStandby)
    } else if train.mileage < 50_000.0 && train.fitness_status == FitnessStatus::Excellent {
        RuleOutcome::new(TrainStatus::Run, 95, FestivalLowMileageExcellent)
    } else if train.status == TrainStatus::Run {
        RuleOutcome::new(TrainStatus::Run, 90, FestivalKeepRunning)
    } else {
        RuleOutcome::new(TrainStatus::Run, 85, FestivalDefaultRun)
    }
}

/// Recomendación para un tren en el modo indicado
pub fn recommend(train: &Train, mode: OperationMode) -> AllocationRecommendation {
    let outcome = match mode {
        OperationMode::Normal => evaluate_normal(train),
        OperationMode::Festival => evaluate_festival(train),
    };

    AllocationRecommendation {
        train_id: train.train_id.clone(),
        current_status: train.status,
        suggested_status: outcome.status,
        confidence: outcome.confidence,
        rule: outcome.rule,
        changed: outcome.status != train.status,
    }
}

/// Recomendaciones para toda la flota, en el orden de entrada
pub fn recommend_fleet(trains: &[Train], mode: OperationMode) -> Vec<AllocationRecommendation> {
    debug!("🧠 Recalculando asignaciones para {} trenes (modo {})", trains.len(), mode);
    trains.iter().map(|train| recommend(train, mode)).collect()
}

/// Conteo por estado sugerido y número de cambios propuestos
pub fn summarize(recommendations: &[AllocationRecommendation]) -> AllocationSummary {
    recommendations
        .iter()
        .fold(AllocationSummary::default(), |mut summary, rec| {
            match rec.suggested_status {
                TrainStatus::Run => summary.run += 1,
                TrainStatus::Standby => summary.standby += 1,
                TrainStatus::Maintenance => summary.maintenance += 1,
            }
            if rec.changed {
                summary.changes += 1;
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(status: TrainStatus, mileage: f64, fitness: FitnessStatus) -> Train {
        Train {
            id: "t".to_string(),
            train_id: "KM-T".to_string(),
            status,
            mileage,
            branding_hours: 120.0,
            fitness_status: fitness,
            cleaning_status: CleaningStatus::Clean,
            branding_status: BrandingStatus::Complete,
            reason_notes: None,
        }
    }

    #[test]
    fn test_normal_mileage_rule_dominates() {
        let mut t = train(TrainStatus::Run, 65_000.0, FitnessStatus::Good);
        let rec = recommend(&t, OperationMode::Normal);
        assert_eq!(rec.suggested_status, TrainStatus::Maintenance);
        assert_eq!(rec.confidence, 95);
        assert!(rec.changed);

        // Ningún otro campo cambia el resultado por encima de 60000
        t.fitness_status = FitnessStatus::Excellent;
        t.cleaning_status = CleaningStatus::NeedsCleaning;
        t.branding_status = BrandingStatus::Pending;
        t.status = TrainStatus::Maintenance;
        let rec = recommend(&t, OperationMode::Normal);
        assert_eq!((rec.suggested_status, rec.confidence), (TrainStatus::Maintenance, 95));
        assert_eq!(rec.rule, AllocationRule::MileageLimit);
        assert!(!rec.changed);
    }

    #[test]
    fn test_normal_boundary_is_strict() {
        let t = train(TrainStatus::Run, 60_000.0, FitnessStatus::Good);
        let rec = recommend(&t, OperationMode::Normal);
        assert_eq!((rec.suggested_status, rec.confidence), (TrainStatus::Run, 85));
    }

    #[test]
    fn test_normal_degraded_fitness() {
        for fitness in [FitnessStatus::Poor, FitnessStatus::RequiresInspection, FitnessStatus::Critical] {
            let t = train(TrainStatus::Run, 30_000.0, fitness);
            let rec = recommend(&t, OperationMode::Normal);
            assert_eq!((rec.suggested_status, rec.confidence), (TrainStatus::Maintenance, 88));
        }
    }

    #[test]
    fn test_normal_servicing_incomplete() {
        let mut t = train(TrainStatus::Run, 30_000.0, FitnessStatus::Excellent);
        t.cleaning_status = CleaningStatus::NeedsCleaning;
        assert_eq!(evaluate_normal(&t).status, TrainStatus::Standby);
        assert_eq!(evaluate_normal(&t).confidence, 82);

        t.cleaning_status = CleaningStatus::Clean;
        t.branding_status = BrandingStatus::InProgress;
        assert_eq!(evaluate_normal(&t).rule, AllocationRule::ServicingIncomplete);
    }

    #[test]
    fn test_normal_low_mileage_excellent_scenario() {
        let t = train(TrainStatus::Standby, 45_000.0, FitnessStatus::Excellent);
        let rec = recommend(&t, OperationMode::Normal);
        assert_eq!((rec.suggested_status, rec.confidence), (TrainStatus::Run, 92));
        assert!(rec.changed);
    }

    #[test]
    fn test_normal_fallbacks() {
        let running = train(TrainStatus::Run, 55_000.0, FitnessStatus::Good);
        assert_eq!(evaluate_normal(&running).rule, AllocationRule::KeepRunning);
        assert_eq!(evaluate_normal(&running).confidence, 85);

        let idle = train(TrainStatus::Standby, 55_000.0, FitnessStatus::Fair);
        let outcome = evaluate_normal(&idle);
        assert_eq!((outcome.status, outcome.confidence), (TrainStatus::Standby, 75));
    }

    #[test]
    fn test_festival_rule_one_precedence() {
        let mut t = train(TrainStatus::Standby, 72_000.0, FitnessStatus::Poor);
        t.cleaning_status = CleaningStatus::NeedsCleaning;
        let rec = recommend(&t, OperationMode::Festival);
        assert_eq!((rec.suggested_status, rec.confidence), (TrainStatus::Maintenance, 96));
        assert_eq!(rec.rule, AllocationRule::FestivalSafetyLimit);

        let critical = train(TrainStatus::Run, 10_000.0, FitnessStatus::Critical);
        assert_eq!(evaluate_festival(&critical).confidence, 96);
    }

    #[test]
    fn test_festival_cascade() {
        let worn = train(TrainStatus::Run, 66_000.0, FitnessStatus::Poor);
        assert_eq!(evaluate_festival(&worn), RuleOutcome::new(TrainStatus::Maintenance, 85, AllocationRule::FestivalWornOut));

        let mut dirty = train(TrainStatus::Maintenance, 50_000.0, FitnessStatus::Good);
        dirty.cleaning_status = CleaningStatus::NeedsCleaning;
        assert_eq!(evaluate_festival(&dirty), RuleOutcome::new(TrainStatus::Run, 88, AllocationRule::FestivalDeferCleaning));

        let standby = train(TrainStatus::Standby, 58_000.0, FitnessStatus::Good);
        assert_eq!(evaluate_festival(&standby).confidence, 92);

        let fresh = train(TrainStatus::Maintenance, 40_000.0, FitnessStatus::Excellent);
        assert_eq!(evaluate_festival(&fresh).confidence, 95);

        let running = train(TrainStatus::Run, 62_000.0, FitnessStatus::Good);
        assert_eq!(evaluate_festival(&running).confidence, 90);

        let other = train(TrainStatus::Maintenance, 62_000.0, FitnessStatus::Good);
        assert_eq!(evaluate_festival(&other), RuleOutcome::new(TrainStatus::Run, 85, AllocationRule::FestivalDefaultRun));
    }

    #[test]
    fn test_poor_fitness_low_mileage_runs_in_festival() {
        // Poor con poco kilometraje no alcanza la regla 2 del modo festival
        let t = train(TrainStatus::Standby, 40_000.0, FitnessStatus::Poor);
        assert_eq!(recommend(&t, OperationMode::Festival).suggested_status, TrainStatus::Run);
        assert_eq!(recommend(&t, OperationMode::Normal).suggested_status, TrainStatus::Maintenance);
    }

    #[test]
    fn test_idempotent() {
        let t = train(TrainStatus::Standby, 58_000.0, FitnessStatus::Fair);
        for mode in [OperationMode::Normal, OperationMode::Festival] {
            assert_eq!(recommend(&t, mode), recommend(&t, mode));
        }
    }

    #[test]
    fn test_summarize() {
        let fleet = vec![
            train(TrainStatus::Run, 65_000.0, FitnessStatus::Good),
            train(TrainStatus::Run, 20_000.0, FitnessStatus::Excellent),
            train(TrainStatus::Standby, 55_000.0, FitnessStatus::Fair),
        ];
        let recs = recommend_fleet(&fleet, OperationMode::Normal);
        let summary = summarize(&recs);
        assert_eq!(summary, AllocationSummary { run: 1, standby: 1, maintenance: 1, changes: 1 });
    }
}
