use axum::{routing::get, Router};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::warn;

use crate::category::Category;
use crate::classifier::CategoryScore;

static HANDLE: OnceCell<Option<PrometheusHandle>> = OnceCell::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder once per process.
    /// Returns `None` if another recorder already owns the global slot.
    pub fn init() -> Option<Self> {
        let handle = HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(h) => Some(h),
            Err(e) => {
                warn!(error = %e, "prometheus recorder not installed; /metrics disabled");
                None
            }
        });
        handle.clone().map(|handle| Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

pub fn record_request(route: &'static str) {
    counter!("categorizer_requests_total", "route" => route).increment(1);
}

pub fn record_duration_ms(ms: f64) {
    histogram!("categorizer_duration_ms").record(ms);
}

/// Count the primary label of one result and any fallback it took.
pub fn record_result(scores: &[CategoryScore]) {
    let Some(top) = scores.first() else {
        return;
    };
    counter!("categorizer_primary_total", "category" => top.category.as_str()).increment(1);
    if top.category == Category::General {
        let kind = if top.confidence == 0 { "empty" } else { "no_match" };
        counter!("categorizer_fallback_total", "kind" => kind).increment(1);
    }
}
