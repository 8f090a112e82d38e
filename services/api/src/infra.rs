use climasense::config::AppConfig;
use climasense::risk::{RiskEngine, RiskEngineConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn engine_from_config(config: &AppConfig) -> RiskEngine {
    RiskEngine::new(config.engine.engine_config())
}

pub(crate) fn default_engine() -> RiskEngine {
    RiskEngine::new(RiskEngineConfig::default())
}
