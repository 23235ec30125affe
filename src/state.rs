//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::CalculationService;

#[derive(Clone)]
pub struct AppState {
    pub calculation_service: Arc<CalculationService>,
}

impl AppState {
    pub fn new(calculation_service: Arc<CalculationService>) -> Self {
        Self {
            calculation_service,
        }
    }
}
