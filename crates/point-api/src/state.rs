//! 应用状态

use std::sync::Arc;

use point_ledger::PointService;

/// HTTP 层共享状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PointService>,
}

impl AppState {
    pub fn new(service: PointService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
