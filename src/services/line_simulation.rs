//! Simulación animada de la línea
//!
//! Un único tren recorre las estaciones en bucle: espera, viaja al
//! siguiente andén en `steps` pasos y al llegar se generan pasajeros
//! aleatorios de subida y bajada en esa estación.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::EnvironmentConfig;
use crate::models::line::{LinePhase, LineSnapshot, Station, StationView};
use crate::services::scheduler::Scheduler;

/// Rango de pasajeros generados por llegada (10..=109)
const PASSENGERS_MIN: u32 = 10;
const PASSENGERS_MAX_EXCLUSIVE: u32 = 110;

pub fn default_stations() -> Vec<Station> {
    [
        ("aluva", "Aluva"),
        ("pulinchodu", "Pulinchodu"),
        ("companypady", "Companypady"),
        ("ambattukavu", "Ambattukavu"),
        ("muttom", "Muttom"),
        ("kalamassery", "Kalamassery"),
    ]
    .iter()
    .enumerate()
    .map(|(position, (id, name))| Station::new(id, name, position))
    .collect()
}

/// Tiempos de la simulación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTiming {
    pub cycle: Duration,
    pub travel: Duration,
    pub dwell: Duration,
    pub steps: u32,
}

impl LineTiming {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self {
            cycle: Duration::from_millis(config.line_cycle_ms),
            travel: Duration::from_millis(config.line_travel_ms),
            dwell: Duration::from_millis(config.line_dwell_ms),
            steps: config.line_steps.max(1),
        }
    }

    /// Espera entre el fin del andén y la siguiente salida
    pub fn idle(&self) -> Duration {
        self.cycle.saturating_sub(self.travel + self.dwell)
    }

    pub fn step(&self) -> Duration {
        self.travel / self.steps.max(1)
    }
}

/// Estado de la línea
#[derive(Debug, Clone)]
pub struct LineSimulation {
    stations: Vec<Station>,
    current_station: usize,
    step: u32,
    steps: u32,
    phase: LinePhase,
}

impl LineSimulation {
    pub fn new(stations: Vec<Station>, steps: u32) -> Self {
        Self {
            stations,
            current_station: 0,
            step: 0,
            steps: steps.max(1),
            phase: LinePhase::Idle,
        }
    }

    pub fn phase(&self) -> LinePhase {
        self.phase
    }

    pub fn current_station(&self) -> usize {
        self.current_station
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    fn next_station(&self) -> usize {
        if self.stations.is_empty() {
            0
        } else {
            (self.current_station + 1) % self.stations.len()
        }
    }

    fn progress(&self) -> f64 {
        f64::from(self.step) / f64::from(self.steps)
    }

    /// Salida hacia la siguiente estación; ignorada si ya está en marcha
    pub fn depart(&mut self) -> bool {
        if self.phase != LinePhase::Idle || self.stations.len() < 2 {
            return false;
        }
        self.phase = LinePhase::Moving;
        self.step = 0;
        true
    }

    /// Un paso del tramo; en el último se llega a la estación
    pub fn advance_step<R: Rng>(&mut self, rng: &mut R) {
        if self.phase != LinePhase::Moving {
            return;
        }
        self.step += 1;
        if self.step >= self.steps {
            self.arrive(rng);
        }
    }

    fn arrive<R: Rng>(&mut self, rng: &mut R) {
        let next = self.next_station();
        self.current_station = next;
        self.step = 0;
        self.phase = LinePhase::Dwelling;

        let station = &mut self.stations[next];
        station.exiting = rng.gen_range(PASSENGERS_MIN..PASSENGERS_MAX_EXCLUSIVE);
        station.boarding = rng.gen_range(PASSENGERS_MIN..PASSENGERS_MAX_EXCLUSIVE);
        debug!(
            "🚉 Llegada a {}: bajan {}, suben {}",
            station.name, station.exiting, station.boarding
        );
    }

    /// Fin del tiempo en andén
    pub fn finish_dwell(&mut self) {
        if self.phase == LinePhase::Dwelling {
            self.phase = LinePhase::Idle;
        }
    }

    pub fn snapshot(&self) -> LineSnapshot {
        let next = self.next_station();
        let progress = if self.phase == LinePhase::Moving { self.progress() } else { 0.0 };
        let span = self.stations.len().saturating_sub(1).max(1) as f64;
        let line_position = ((self.current_station as f64 + progress) / span).min(1.0);

        let status_message = match (self.phase, self.stations.get(self.current_station), self.stations.get(next)) {
            (LinePhase::Moving, _, Some(to)) => format!("Train moving to {}", to.name),
            (_, Some(at), _) => format!("Train stopped at {}", at.name),
            _ => "No stations configured".to_string(),
        };

        LineSnapshot {
            current_station: self.current_station,
            next_station: next,
            phase: self.phase,
            progress,
            line_position,
            status_message,
            stations: self
                .stations
                .iter()
                .map(|s| StationView {
                    crowd_level: s.crowd_level(),
                    station: s.clone(),
                })
                .collect(),
        }
    }
}

/// Un ciclo completo: espera, viaje paso a paso y tiempo en andén
pub async fn run_cycle<R: Rng + Send>(
    line: &RwLock<LineSimulation>,
    scheduler: &dyn Scheduler,
    timing: LineTiming,
    rng: &mut R,
) {
    scheduler.sleep(timing.idle()).await;
    if !line.write().await.depart() {
        return;
    }

    for _ in 0..timing.steps {
        scheduler.sleep(timing.step()).await;
        line.write().await.advance_step(rng);
    }

    scheduler.sleep(timing.dwell).await;
    line.write().await.finish_dwell();
}

/// Bucle de fondo de la simulación; termina con el proceso
pub async fn run_line_simulation(
    line: Arc<RwLock<LineSimulation>>,
    scheduler: Arc<dyn Scheduler>,
    timing: LineTiming,
) {
    info!(
        "🚆 Simulación de línea iniciada (ciclo {:?}, {} pasos)",
        timing.cycle, timing.steps
    );
    let mut rng = StdRng::from_entropy();
    loop {
        run_cycle(&line, scheduler.as_ref(), timing, &mut rng).await;
    }
}
