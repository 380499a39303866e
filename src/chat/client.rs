use crate::config::WidgetConfig;
use crate::error::WidgetResult;
use crate::types::{ChatReply, ChatRequest};
use async_trait::async_trait;

/// Anything that can answer a chat message.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, message: &str) -> WidgetResult<String>;
}

/// `POST {"message": ...}` to the chat endpoint, expect `{"response": ...}`.
#[derive(Clone, Debug)]
pub struct HttpChatClient {
    client: reqwest::Client,
    url: String,
}

impl HttpChatClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &WidgetConfig) -> WidgetResult<Self> {
        let url = config.chat_url()?;
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpChatClient {
    async fn send(&self, message: &str) -> WidgetResult<String> {
        let res = self
            .client
            .post(&self.url)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await?;

        // Status is informational only; any body carrying a reply is shown.
        let status = res.status();
        let body_text = res.text().await?;
        if !status.is_success() {
            tracing::debug!(%status, "chat endpoint returned an error status");
        }

        let reply: ChatReply = serde_json::from_str(&body_text)?;
        Ok(reply.response)
    }
}
