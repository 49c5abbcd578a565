pub mod feishu;
pub mod slack;
pub mod telegram;

use serde::Deserialize;

use crate::{alert::AlertFields, Error, Result};

/// Query parameters accepted by the forward endpoint. Which ones are
/// required depends on the platform.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForwardParams {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub message_thread_id: Option<String>,
}

/// One outbound notification backend with its request-scoped credentials.
#[derive(Debug, Clone)]
pub enum Destination {
    Feishu {
        url: String,
    },
    Telegram {
        token: String,
        chat_id: String,
        thread_id: Option<String>,
    },
    Slack {
        url: String,
    },
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(String::from)
}

impl Destination {
    /// Resolves the per-platform parameters up front, so an unsupported
    /// platform or a missing credential fails before any alert is processed.
    pub fn resolve(params: &ForwardParams) -> Result<Self> {
        match params.platform.as_deref() {
            Some("feishu") => match non_empty(&params.url) {
                Some(url) => Ok(Destination::Feishu { url }),
                None => Err(Error::Validation(
                    "Webhook URL parameter is missing for Feishu".to_string(),
                )),
            },
            Some("telegram") => {
                match (
                    non_empty(&params.telegram_token),
                    non_empty(&params.telegram_chat_id),
                ) {
                    (Some(token), Some(chat_id)) => Ok(Destination::Telegram {
                        token,
                        chat_id,
                        thread_id: non_empty(&params.message_thread_id),
                    }),
                    _ => Err(Error::Validation(
                        "Telegram token or chat ID is missing".to_string(),
                    )),
                }
            }
            Some("slack") => match non_empty(&params.url) {
                Some(url) => Ok(Destination::Slack { url }),
                None => Err(Error::Validation(
                    "Webhook URL parameter is missing for Slack".to_string(),
                )),
            },
            Some(other) => Err(Error::Validation(format!("Unsupported platform: {other}"))),
            None => Err(Error::Validation(
                "Unsupported platform: no platform parameter given".to_string(),
            )),
        }
    }

    /// Formats and sends one alert to this destination. `telegram_api_base`
    /// comes from configuration and only matters for the Telegram arm.
    pub async fn send(
        &self,
        client: &reqwest::Client,
        telegram_api_base: &str,
        fields: &AlertFields,
    ) -> Result<()> {
        match self {
            Destination::Feishu { url } => feishu::send(client, url, fields).await,
            Destination::Telegram {
                token,
                chat_id,
                thread_id,
            } => {
                telegram::send(
                    client,
                    telegram_api_base,
                    token,
                    chat_id,
                    thread_id.as_deref(),
                    fields,
                )
                .await
            }
            Destination::Slack { url } => slack::send(client, url, fields).await,
        }
    }
}
