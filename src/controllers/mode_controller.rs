use tracing::info;

use crate::dto::planner_dto::{ModeRequest, ModeResponse};
use crate::models::allocation::OperationMode;
use crate::state::AppState;

pub struct ModeController {
    state: AppState,
}

impl ModeController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn get(&self) -> ModeResponse {
        self.state.current_mode().await.into()
    }

    pub async fn set(&self, request: ModeRequest) -> ModeResponse {
        let mode = OperationMode::from_festival_flag(request.festival);
        *self.state.mode.write().await = mode;
        info!("🎛️ Modo de operación: {}", mode);
        mode.into()
    }

    pub async fn toggle(&self) -> ModeResponse {
        let mut current = self.state.mode.write().await;
        *current = current.toggled();
        info!("🎛️ Modo de operación: {}", *current);
        (*current).into()
    }
}
