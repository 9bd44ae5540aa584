use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use review_common::config::AppConfig;
use review_common::error::ChannelError;

use crate::channel::Channel;

/// Telegram Bot API channel bound to a single chat.
pub struct TelegramChannel {
    client: reqwest::Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

/// Envelope of every Bot API reply.
#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    description: Option<String>,
}

impl TelegramChannel {
    pub fn new(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ChannelError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ChannelError> {
        Self::new(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            config.telegram_chat_id.clone(),
            config.request_timeout(),
        )
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.bot_token, method)
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<(), ChannelError> {
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        // The bot token is part of the URL, so reqwest errors must not carry it.
        let resp = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = resp.status();
        let raw = resp.text().await.map_err(reqwest::Error::without_url)?;
        let reply: Option<BotApiReply> = serde_json::from_str(&raw).ok();

        match reply {
            Some(BotApiReply { ok: true, .. }) if status.is_success() => Ok(()),
            Some(BotApiReply { description, .. }) => Err(ChannelError::Api {
                status,
                description: description.unwrap_or_else(|| "no description".to_string()),
            }),
            None => Err(ChannelError::Api {
                status,
                description: raw,
            }),
        }
    }
}
