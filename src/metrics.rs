use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::pricing::EstimateField;

/// Install the global Prometheus recorder
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
pub fn init_metric_descriptions() {
    describe_counter!(
        "estimates_total",
        "Calculator estimates by result (ok or the rejected field)"
    );
    describe_counter!("quotes_created_total", "Quote requests stored");
    describe_gauge!("uniform_shop_info", "Service version information");

    gauge!("uniform_shop_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a successful estimate
pub fn record_estimate() {
    counter!("estimates_total", "result" => "ok").increment(1);
}

/// Record an estimate rejected because `field` did not resolve
pub fn record_estimate_rejected(field: EstimateField) {
    counter!(
        "estimates_total",
        "result" => "invalid",
        "field" => field.as_str(),
    )
    .increment(1);
}

/// Record a stored quote request
pub fn record_quote_created(with_estimate: bool) {
    counter!(
        "quotes_created_total",
        "with_estimate" => if with_estimate { "true" } else { "false" },
    )
    .increment(1);
}
