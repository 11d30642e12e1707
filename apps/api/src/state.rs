use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionGateway;
use crate::persona::PersonaStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn CompletionGateway>,
    pub persona: PersonaStore,
    pub config: Config,
}
