use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref ALERTS_FORWARDED_TOTAL: IntCounter = IntCounter::with_opts(Opts::new(
        "forwarder_alerts_forwarded_total",
        "Total number of alerts successfully forwarded to a destination.",
    ))
    .unwrap();
    pub static ref DELIVERY_FAILURES_TOTAL: IntCounter = IntCounter::with_opts(Opts::new(
        "forwarder_delivery_failures_total",
        "Total number of outbound deliveries that failed.",
    ))
    .unwrap();
}

/// Registers the counters with the process registry. Called once at startup.
pub fn register_metrics() {
    REGISTRY
        .register(Box::new(ALERTS_FORWARDED_TOTAL.clone()))
        .expect("Failed to register ALERTS_FORWARDED_TOTAL");
    REGISTRY
        .register(Box::new(DELIVERY_FAILURES_TOTAL.clone()))
        .expect("Failed to register DELIVERY_FAILURES_TOTAL");
}

// Function to gather metrics for exposition
pub fn gather_metrics() -> String {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Failed to convert metrics to string")
}
