use crate::models::line::LineSnapshot;
use crate::state::AppState;

pub struct LineController {
    state: AppState,
}

impl LineController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn snapshot(&self) -> LineSnapshot {
        self.state.line.read().await.snapshot()
    }
}
