use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use super::AppState;
use crate::{
    alert::AlertBatch,
    metrics::{ALERTS_FORWARDED_TOTAL, DELIVERY_FAILURES_TOTAL},
    sinks::{Destination, ForwardParams},
    Error, Result,
};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn metrics() -> String {
    crate::metrics::gather_metrics()
}

/// Receives an Alertmanager webhook batch and forwards every alert to the
/// destination selected by the query parameters.
///
/// Validation runs before any outbound call; a delivery failure aborts the
/// rest of the batch. Alerts already sent stay sent.
pub async fn forward_alerts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ForwardParams>,
    body: std::result::Result<Json<AlertBatch>, JsonRejection>,
) -> Result<Json<Value>> {
    let destination = Destination::resolve(&params).map_err(|e| {
        error!("{e}");
        e
    })?;

    let Json(batch) = body.map_err(|e| {
        error!("Failed to read alert payload: {e}");
        Error::Validation("No JSON data received".to_string())
    })?;

    info!("Received alert data: {batch:?}");

    if batch.alerts.is_empty() {
        error!("No alerts found in the received data");
        return Err(Error::Validation(
            "No alerts found in the received data".to_string(),
        ));
    }

    for (position, alert) in batch.alerts.iter().enumerate() {
        let fields = alert.fields(position).map_err(|e| {
            error!("{e}");
            e
        })?;

        match destination
            .send(&state.client, &state.telegram_api_base, &fields)
            .await
        {
            Ok(()) => ALERTS_FORWARDED_TOTAL.inc(),
            Err(e) => {
                DELIVERY_FAILURES_TOTAL.inc();
                return Err(e);
            }
        }
    }

    Ok(Json(json!({
        "status": "success",
        "message": "Alerts forwarded successfully",
    })))
}
