use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result};

/// Alertmanager webhook body. Group-level fields are ignored; only the
/// per-alert entries matter here.
#[derive(Debug, Deserialize, Serialize)]
pub struct AlertBatch {
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Alert {
    pub status: Option<String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(rename = "startsAt")]
    pub starts_at: Option<String>,
    #[serde(rename = "endsAt")]
    pub ends_at: Option<String>,
}

/// One alert flattened for rendering: placeholder defaults applied,
/// timestamps reformatted for display.
#[derive(Debug)]
pub struct AlertFields {
    pub name: String,
    pub severity: String,
    pub summary: String,
    pub description: String,
    pub starts_at: String,
    pub ends_at: String,
    pub firing: bool,
}

impl Alert {
    /// Flattens labels, annotations and timestamps into displayable fields.
    ///
    /// `status` is the one field without a default: an alert missing it is
    /// rejected with a validation error naming its position in the batch.
    pub fn fields(&self, position: usize) -> Result<AlertFields> {
        let status = self.status.as_deref().ok_or_else(|| {
            Error::Validation(format!(
                "Alert at position {position} is missing required field 'status'"
            ))
        })?;

        Ok(AlertFields {
            name: self.label_or("alertname", "No alertname"),
            severity: self.label_or("severity", "No severity"),
            summary: self.annotation_or("summary", "No summary"),
            description: self.annotation_or("description", "No description"),
            starts_at: self
                .starts_at
                .as_deref()
                .map(format_time)
                .unwrap_or_else(|| "No start time".to_string()),
            ends_at: self
                .ends_at
                .as_deref()
                .map(format_time)
                .unwrap_or_else(|| "No end time".to_string()),
            firing: status == "firing",
        })
    }

    fn label_or(&self, key: &str, default: &str) -> String {
        self.labels
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn annotation_or(&self, key: &str, default: &str) -> String {
        self.annotations
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

/// Reformats a strict `YYYY-MM-DDTHH:MM:SSZ` timestamp for display.
/// Anything that does not parse is logged and passed through untouched.
pub fn format_time(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ") {
        Ok(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(e) => {
            warn!("Failed to format time {raw:?}: {e}");
            raw.to_string()
        }
    }
}
