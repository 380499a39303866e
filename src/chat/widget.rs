use super::client::ChatTransport;
use crate::config::DEFAULT_FALLBACK_MESSAGE;
use crate::error::WidgetResult;
use crate::types::ChatMessage;

/// A request that has been shown to the user and is awaiting a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub seq: u64,
    pub message: String,
}

/// State behind the chat widget: window visibility, the draft, and the
/// rendered conversation.
///
/// At most one request is outstanding. Replies are matched by sequence
/// number, so a late reply for an abandoned request is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatWidget {
    open: bool,
    input: String,
    messages: Vec<ChatMessage>,
    in_flight: Option<u64>,
    next_seq: u64,
    fallback_message: String,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_MESSAGE)
    }
}

impl ChatWidget {
    pub fn new(fallback_message: impl Into<String>) -> Self {
        Self {
            open: false,
            input: String::new(),
            messages: Vec::new(),
            in_flight: None,
            next_seq: 1,
            fallback_message: fallback_message.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between closed and open. Returns the new state.
    pub fn toggle_window(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }

    /// Take the draft for sending.
    ///
    /// Blank drafts are ignored. While a request is outstanding the draft is
    /// left untouched so it can be sent once the reply arrives.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        let message = self.input.trim();
        if message.is_empty() {
            return None;
        }
        if self.in_flight.is_some() {
            tracing::debug!("chat request already in flight; ignoring submit");
            return None;
        }
        let message = message.to_string();

        self.messages.push(ChatMessage::user(message.clone()));
        self.input.clear();

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        Some(PendingSend { seq, message })
    }

    /// Render the outcome of `pending`. Returns false if the reply was stale.
    pub fn finish_send(&mut self, pending: &PendingSend, result: WidgetResult<String>) -> bool {
        if self.in_flight != Some(pending.seq) {
            tracing::warn!(seq = pending.seq, "discarding reply for stale chat request");
            return false;
        }
        self.in_flight = None;

        let reply = match result {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, "error fetching bot response");
                self.fallback_message.clone()
            }
        };
        self.messages.push(ChatMessage::bot(reply));
        true
    }

    /// Send the current draft and wait for the reply.
    ///
    /// Returns whether anything was sent.
    pub async fn submit(&mut self, transport: &impl ChatTransport) -> bool {
        let Some(pending) = self.begin_send() else {
            return false;
        };
        let result = transport.send(&pending.message).await;
        self.finish_send(&pending, result);
        true
    }
}
