// src/api/state.rs
use crate::config::AppConfig;
use crate::providers::ProviderFactory;
use crate::providers::mistral::MistralFactory;
use crate::solver::Solver;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub solver: Solver,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let factory = MistralFactory::new(Client::new(), config.mistral.clone());
        Self::with_factory(config, Arc::new(factory))
    }

    /// Builds the state around any provider factory; tests use this to inject fakes.
    pub fn with_factory(config: AppConfig, factory: Arc<dyn ProviderFactory>) -> Self {
        let solver = Solver::new(factory, config.mistral.model.clone());
        Self {
            config: Arc::new(config),
            solver,
        }
    }
}
