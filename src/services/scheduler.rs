//! Servicio de temporización
//!
//! Los retardos del dashboard (el "pensando" del planificador, la
//! aplicación del what-if, los pasos de la simulación de línea) pasan
//! por este trait para que los tests controlen el tiempo.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Esperar `duration` según el reloj del scheduler
    async fn sleep(&self, duration: Duration);
}

/// Scheduler real sobre `tokio::time`
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Scheduler sin retardos: el cómputo es síncrono a efectos prácticos
#[derive(Debug, Clone, Default)]
pub struct ImmediateScheduler;

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}

#[derive(Debug, Default)]
struct VirtualClock {
    now: Duration,
    sleepers: Vec<(Duration, oneshot::Sender<()>)>,
}

/// Scheduler de tiempo virtual: los sleeps solo terminan cuando el
/// test avanza el reloj con `advance`.
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    clock: Arc<Mutex<VirtualClock>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiempo virtual transcurrido
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Número de sleeps pendientes
    pub fn pending(&self) -> usize {
        self.lock().sleepers.len()
    }

    /// Avanzar el reloj y despertar los sleeps vencidos
    pub fn advance(&self, by: Duration) {
        let due = {
            let mut clock = self.lock();
            clock.now += by;
            let now = clock.now;
            let (due, waiting): (Vec<_>, Vec<_>) = clock
                .sleepers
                .drain(..)
                .partition(|(deadline, _)| *deadline <= now);
            clock.sleepers = waiting;
            due
        };

        for (_, waker) in due {
            // El receptor puede haberse descartado si la tarea se canceló
            let _ = waker.send(());
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VirtualClock> {
        // Un panic con el lock tomado no deja el reloj en estado inválido
        self.clock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Scheduler for VirtualScheduler {
    async fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }

        let receiver = {
            let mut clock = self.lock();
            let deadline = clock.now + duration;
            let (sender, receiver) = oneshot::channel();
            clock.sleepers.push((deadline, sender));
            receiver
        };

        let _ = receiver.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_virtual_sleep_waits_for_advance() {
        let scheduler = VirtualScheduler::new();
        let sleeper = scheduler.clone();
        let handle = tokio::spawn(async move {
            sleeper.sleep(Duration::from_secs(2)).await;
        });

        while scheduler.pending() == 0 {
            tokio::task::yield_now().await;
        }

        scheduler.advance(Duration::from_millis(1500));
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(500));
        handle.await.unwrap();
        assert_eq!(scheduler.now(), Duration::from_secs(2));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_zero_sleep_returns_immediately() {
        let scheduler = VirtualScheduler::new();
        scheduler.sleep(Duration::ZERO).await;
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_immediate_scheduler() {
        ImmediateScheduler.sleep(Duration::from_secs(3600)).await;
    }
}
