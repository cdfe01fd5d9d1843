use std::sync::Arc;

use heal_core::application::HealService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HealService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HealService) -> Self {
        Self { args, service }
    }
}
