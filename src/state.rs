use metrics_exporter_prometheus::PrometheusHandle;
use parishdesk_access::MenuModuleMapping;
use parishdesk_models::MenuItem;
use std::fmt;
use std::sync::Arc;

use crate::client::{BackendApi, BackendError, HttpBackend};
use crate::config::navigation::default_navigation_items;
use crate::config::{BackendConfig, CorsConfig};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
    pub sessions: SessionStore,
    pub mapping: Arc<MenuModuleMapping>,
    pub navigation: Arc<Vec<MenuItem>>,
    pub cors_config: CorsConfig,
    pub metrics: Option<PrometheusHandle>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions)
            .field("mapping", &self.mapping.len())
            .field("navigation", &self.navigation.len())
            .field("cors_config", &self.cors_config)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// State with the compiled-in mapping and sidebar and no metrics recorder.
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self {
            backend,
            sessions: SessionStore::new(),
            mapping: Arc::new(MenuModuleMapping::builtin().clone()),
            navigation: Arc::new(default_navigation_items()),
            cors_config: CorsConfig::default(),
            metrics: None,
        }
    }

    pub fn with_mapping(mut self, mapping: MenuModuleMapping) -> Self {
        self.mapping = Arc::new(mapping);
        self
    }

    pub fn with_navigation(mut self, items: Vec<MenuItem>) -> Self {
        self.navigation = Arc::new(items);
        self
    }

    pub fn with_cors_config(mut self, cors_config: CorsConfig) -> Self {
        self.cors_config = cors_config;
        self
    }

    pub fn with_metrics(mut self, metrics: Option<PrometheusHandle>) -> Self {
        self.metrics = metrics;
        self
    }
}

pub fn init_app_state(metrics: Option<PrometheusHandle>) -> Result<AppState, BackendError> {
    let backend = HttpBackend::new(BackendConfig::from_env())?;

    Ok(AppState::new(Arc::new(backend))
        .with_cors_config(CorsConfig::from_env())
        .with_metrics(metrics))
}
