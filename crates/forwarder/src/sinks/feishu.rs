//! Feishu interactive-card webhook sink.

use serde_json::{json, Value};
use tracing::{error, info};

use crate::{alert::AlertFields, Error, Result};

/// Builds the interactive card for one alert. Firing alerts get the red
/// label and alert title, everything else the green recovery variant.
pub fn build_card(fields: &AlertFields) -> Value {
    let (status_color, status_text, title_text) = if fields.firing {
        ("red", "告警", "告警通知")
    } else {
        ("green", "恢复", "恢复通知")
    };

    json!({
        "msg_type": "interactive",
        "card": {
            "config": {
                "wide_screen_mode": true,
                "enable_forward": true
            },
            "elements": [
                {
                    "tag": "div",
                    "text": {
                        "tag": "lark_md",
                        "content": format!(
                            "**告警名称:** {}\n\
                             **状态:** <font color=\"{status_color}\">{status_text}</font>\n\
                             **严重性:** {}\n\
                             **摘要:** {}\n\
                             **详情:** {}\n\
                             **开始时间:** {}\n\
                             **结束时间:** {}\n",
                            fields.name,
                            fields.severity,
                            fields.summary,
                            fields.description,
                            fields.starts_at,
                            fields.ends_at,
                        )
                    }
                }
            ],
            "header": {
                "title": {
                    "tag": "plain_text",
                    "content": title_text
                }
            }
        }
    })
}

pub async fn send(client: &reqwest::Client, url: &str, fields: &AlertFields) -> Result<()> {
    let card = build_card(fields);
    info!("Sending message to Feishu webhook: {card}");

    let response = client.post(url).json(&card).send().await.map_err(|e| {
        error!("Failed to send alert to Feishu webhook: {e}");
        Error::Delivery("Failed to send alert to Feishu webhook".to_string())
    })?;

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Failed to send alert to Feishu webhook: {body}");
        return Err(Error::Delivery(
            "Failed to send alert to Feishu webhook".to_string(),
        ));
    }

    Ok(())
}
