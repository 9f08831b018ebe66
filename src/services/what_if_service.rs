//! Motor de escenarios what-if
//!
//! Aplica overrides de un tren sobre una copia de la flota canónica.
//! Cada aplicación parte siempre de la flota canónica: los escenarios
//! no se acumulan.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::train::{BrandingStatus, CleaningStatus, FitnessStatus, Train};
use crate::utils::errors::{not_found_error, AppResult};

/// Toggles del simulador
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhatIfOverrides {
    /// Fuerza fitness a Poor
    #[serde(default)]
    pub fitness_failure: bool,
    /// Fuerza limpieza a Needs Cleaning
    #[serde(default)]
    pub cleaning_not_done: bool,
    /// Fuerza branding a Pending
    #[serde(default)]
    pub job_card_pending: bool,
}

impl WhatIfOverrides {
    fn apply_to(&self, train: &mut Train) {
        if self.fitness_failure {
            train.fitness_status = FitnessStatus::Poor;
        }
        if self.cleaning_not_done {
            train.cleaning_status = CleaningStatus::NeedsCleaning;
        }
        if self.job_card_pending {
            train.branding_status = BrandingStatus::Pending;
        }
    }
}

/// Copia de la flota con las overrides aplicadas al tren indicado
pub fn apply_overrides(
    canonical: &[Train],
    train_id: &str,
    overrides: WhatIfOverrides,
) -> AppResult<Vec<Train>> {
    if !canonical.iter().any(|t| t.train_id == train_id) {
        return Err(not_found_error("Train", train_id));
    }

    Ok(canonical
        .iter()
        .map(|train| {
            let mut copy = train.clone();
            if copy.train_id == train_id {
                overrides.apply_to(&mut copy);
            }
            copy
        })
        .collect())
}

/// Escenario activo
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WhatIfScenario {
    pub train_id: String,
    pub overrides: WhatIfOverrides,
    pub trains: Vec<Train>,
}

/// Sesión del simulador: como mucho un escenario activo
#[derive(Debug, Clone, Default)]
pub struct WhatIfSession {
    scenario: Option<WhatIfScenario>,
}

impl WhatIfSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scenario(&self) -> Option<&WhatIfScenario> {
        self.scenario.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.scenario.is_some()
    }

    /// Publicar un escenario ya calculado con `apply_overrides`
    pub fn set(&mut self, scenario: WhatIfScenario) {
        info!(
            "🧪 Escenario what-if activo para {} ({:?})",
            scenario.train_id, scenario.overrides
        );
        self.scenario = Some(scenario);
    }

    /// Descartar el escenario; la vista vuelve a la flota canónica
    pub fn reset(&mut self) {
        if self.scenario.take().is_some() {
            info!("↩️ Escenario what-if descartado");
        }
    }

    /// Flota simulada, o la canónica si no hay escenario
    pub fn view(&self, canonical: &[Train]) -> Vec<Train> {
        match &self.scenario {
            Some(scenario) => scenario.trains.clone(),
            None => canonical.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::train::TrainStatus;
    use crate::repositories::seed::seed_trains;
    use crate::utils::errors::AppError;

    #[test]
    fn test_no_toggles_is_identity() {
        let canonical = seed_trains();
        let simulated = apply_overrides(&canonical, "KM-02", WhatIfOverrides::default()).unwrap();
        assert_eq!(simulated, canonical);
        assert_eq!(
            serde_json::to_vec(&simulated).unwrap(),
            serde_json::to_vec(&canonical).unwrap()
        );
    }

    #[test]
    fn test_only_target_changes() {
        let canonical = seed_trains();
        let overrides = WhatIfOverrides {
            fitness_failure: true,
            cleaning_not_done: true,
            job_card_pending: true,
        };
        let simulated = apply_overrides(&canonical, "KM-01", overrides).unwrap();

        let target = simulated.iter().find(|t| t.train_id == "KM-01").unwrap();
        assert_eq!(target.fitness_status, FitnessStatus::Poor);
        assert_eq!(target.cleaning_status, CleaningStatus::NeedsCleaning);
        assert_eq!(target.branding_status, BrandingStatus::Pending);
        assert_eq!(target.status, TrainStatus::Run);
        assert_eq!(target.mileage, canonical[0].mileage);

        for (before, after) in canonical.iter().zip(simulated.iter()).skip(1) {
            assert_eq!(before, after);
        }
        // La flota canónica no se toca
        assert_eq!(canonical, seed_trains());
    }

    #[test]
    fn test_single_toggle() {
        let canonical = seed_trains();
        let overrides = WhatIfOverrides { cleaning_not_done: true, ..Default::default() };
        let simulated = apply_overrides(&canonical, "KM-05", overrides).unwrap();
        let target = simulated.iter().find(|t| t.train_id == "KM-05").unwrap();
        assert_eq!(target.cleaning_status, CleaningStatus::NeedsCleaning);
        assert_eq!(target.fitness_status, FitnessStatus::Excellent);
        assert_eq!(target.branding_status, BrandingStatus::Complete);
    }

    #[test]
    fn test_unknown_train_is_rejected() {
        let canonical = seed_trains();
        let result = apply_overrides(&canonical, "KM-99", WhatIfOverrides::default());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_session_reset_restores_canonical() {
        let canonical = seed_trains();
        let mut session = WhatIfSession::new();
        assert_eq!(session.view(&canonical), canonical);

        let overrides = WhatIfOverrides { fitness_failure: true, ..Default::default() };
        let trains = apply_overrides(&canonical, "KM-02", overrides).unwrap();
        session.set(WhatIfScenario { train_id: "KM-02".to_string(), overrides, trains });
        assert!(session.is_active());
        assert_ne!(session.view(&canonical), canonical);

        session.reset();
        assert!(!session.is_active());
        assert_eq!(session.view(&canonical), canonical);
    }

    #[test]
    fn test_scenarios_do_not_stack() {
        let canonical = seed_trains();
        let mut session = WhatIfSession::new();

        let first = WhatIfOverrides { fitness_failure: true, ..Default::default() };
        let trains = apply_overrides(&canonical, "KM-01", first).unwrap();
        session.set(WhatIfScenario { train_id: "KM-01".to_string(), overrides: first, trains });

        let second = WhatIfOverrides { cleaning_not_done: true, ..Default::default() };
        let trains = apply_overrides(&canonical, "KM-02", second).unwrap();
        session.set(WhatIfScenario { train_id: "KM-02".to_string(), overrides: second, trains });

        let view = session.view(&canonical);
        assert_eq!(view[0], canonical[0]);
        assert_eq!(view[1].cleaning_status, CleaningStatus::NeedsCleaning);
    }
}
