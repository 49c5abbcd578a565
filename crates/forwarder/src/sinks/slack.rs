//! Slack block-webhook sink.

use serde::Serialize;
use tracing::{error, info};

use crate::{alert::AlertFields, Error, Result};

#[derive(Debug, Serialize)]
pub struct SlackMessage {
    pub blocks: Vec<SlackBlock>,
}

#[derive(Debug, Serialize)]
pub struct SlackBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: SlackText,
}

#[derive(Debug, Serialize)]
pub struct SlackText {
    #[serde(rename = "type")]
    pub text_type: String,
    pub text: String,
}

/// Builds a single mrkdwn section block for one alert. Slack mrkdwn needs
/// no escaping of the interpolated values.
pub fn build_message(fields: &AlertFields) -> SlackMessage {
    let (status_text, emoji) = if fields.firing {
        ("Firing", ":fire:")
    } else {
        ("Resolved", ":white_check_mark:")
    };

    let text = format!(
        "*告警名称:* {}\n*状态:* {status_text} {emoji}\n*严重性:* {}\n*摘要:* {}\n*详情:* {}\n*开始时间:* {}\n*结束时间:* {}",
        fields.name, fields.severity, fields.summary, fields.description, fields.starts_at, fields.ends_at,
    );

    SlackMessage {
        blocks: vec![SlackBlock {
            block_type: "section".to_string(),
            text: SlackText {
                text_type: "mrkdwn".to_string(),
                text,
            },
        }],
    }
}

pub async fn send(client: &reqwest::Client, url: &str, fields: &AlertFields) -> Result<()> {
    let message = build_message(fields);
    info!(
        "Sending message to Slack webhook: {}",
        serde_json::to_string(&message)?
    );

    let response = client.post(url).json(&message).send().await.map_err(|e| {
        error!("Failed to send alert to Slack webhook: {e}");
        Error::Delivery("Failed to send alert to Slack webhook".to_string())
    })?;

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Failed to send alert to Slack webhook: {body}");
        return Err(Error::Delivery(
            "Failed to send alert to Slack webhook".to_string(),
        ));
    }

    Ok(())
}
