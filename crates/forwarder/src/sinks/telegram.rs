//! Telegram Bot API sink.
//!
//! Sends one message per alert through the `sendMessage` endpoint using
//! MarkdownV2 formatting, escaping every interpolated value.

use serde_json::{json, Value};
use tracing::{error, info};

use crate::{alert::AlertFields, Error, Result};

/// Characters that must be backslash-escaped in MarkdownV2 text, including
/// the backslash itself.
const ESCAPE_CHARS: [char; 19] = [
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes a field value for interpolation into MarkdownV2 text. Applied to
/// values only, never to the surrounding template, so markup written by this
/// sink is left intact.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if ESCAPE_CHARS.contains(&ch) {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}

pub fn build_text(fields: &AlertFields) -> String {
    let (status_text, emoji) = if fields.firing {
        ("Firing", "🔥🔥🔥🔥")
    } else {
        ("Resolved", "✅✅✅✅")
    };

    format!(
        "*告警名称:* {}\n\
         *状态:* {} {emoji}\n\
         *告警级别:* {}\n\
         *摘要:* {}\n\
         *详情:* {}\n\
         *开始时间:* {}\n\
         *结束时间:* {}",
        escape_markdown_v2(&fields.name),
        escape_markdown_v2(status_text),
        escape_markdown_v2(&fields.severity),
        escape_markdown_v2(&fields.summary),
        escape_markdown_v2(&fields.description),
        escape_markdown_v2(&fields.starts_at),
        escape_markdown_v2(&fields.ends_at),
    )
}

/// Builds the `sendMessage` request body. The thread id is only present
/// when the caller supplied one.
pub fn build_request_body(chat_id: &str, thread_id: Option<&str>, text: &str) -> Value {
    let mut body = json!({
        "chat_id": chat_id,
        "text": text,
        "parse_mode": "MarkdownV2",
    });
    if let Some(thread) = thread_id {
        body["message_thread_id"] = json!(thread);
    }
    body
}

pub async fn send(
    client: &reqwest::Client,
    api_base: &str,
    token: &str,
    chat_id: &str,
    thread_id: Option<&str>,
    fields: &AlertFields,
) -> Result<()> {
    let text = build_text(fields);
    info!("Sending message to Telegram: {text}");

    let api_url = format!("{api_base}/bot{token}/sendMessage");
    let body = build_request_body(chat_id, thread_id, &text);

    let response = client.post(&api_url).json(&body).send().await.map_err(|e| {
        error!("Failed to send alert to Telegram: {e}");
        Error::Delivery("Failed to send alert to Telegram".to_string())
    })?;

    if !response.status().is_success() {
        let detail = response.text().await.unwrap_or_default();
        error!("Failed to send alert to Telegram: {detail}");
        return Err(Error::Delivery(
            "Failed to send alert to Telegram".to_string(),
        ));
    }

    Ok(())
}
