//! Shared application state for all routes.

use crate::service::ValidationRules;
use crate::store::CanteenStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CanteenStore>,
    pub rules: ValidationRules,
}

impl AppState {
    pub fn new(store: Arc<dyn CanteenStore>) -> Self {
        Self {
            store,
            rules: ValidationRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }
}
