//! Application Context
//!
//! Shared values provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::BackendClient;
use crate::config::BackendConfig;

/// App-wide values provided via context
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// Where backend requests go
    pub backend: BackendConfig,
}

impl AppContext {
    pub fn new(backend: BackendConfig) -> Self {
        Self { backend }
    }

    /// Fresh HTTP client for the configured backend
    pub fn client(&self) -> BackendClient {
        BackendClient::new(self.backend.clone())
    }
}

/// Get the app context, falling back to the compiled-in backend
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_default()
}
