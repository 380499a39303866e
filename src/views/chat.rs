use crate::chat::{ChatTransport, ChatWidget, HttpChatClient};
use crate::config::config;
use crate::error::WidgetError;
use crate::types::{ChatMessage, Sender};
use dioxus::prelude::*;

const SCROLL_TO_LATEST: &str = r#"
const list = document.getElementById('chat-messages');
if (list) { list.scrollTop = list.scrollHeight; }
"#;

fn scroll_to_latest() {
    let _ = document::eval(SCROLL_TO_LATEST);
}

pub fn window_class(open: bool) -> &'static str {
    if open { "chat-window open" } else { "chat-window" }
}

pub fn message_class(sender: Sender) -> String {
    format!("message {}", sender.css_class())
}

fn build_client() -> Option<HttpChatClient> {
    match HttpChatClient::from_config(config()) {
        Ok(client) => {
            tracing::info!(url = client.url(), "chat widget ready");
            Some(client)
        }
        Err(err) => {
            tracing::error!(error = %err, "chat endpoint unavailable");
            None
        }
    }
}

#[component]
pub fn ChatWidgetView() -> Element {
    let mut widget = use_signal(|| ChatWidget::new(config().fallback_message.clone()));
    let client = use_hook(build_client);

    let message_count = use_memo(move || widget.read().messages().len());
    use_effect(move || {
        if message_count() > 0 {
            scroll_to_latest();
        }
    });

    let mut send_message = move || {
        let Some(pending) = widget.write().begin_send() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = match &client {
                Some(client) => client.send(&pending.message).await,
                None => Err(WidgetError::Config(
                    "chat endpoint is not configured".to_string(),
                )),
            };
            widget.write().finish_send(&pending, result);
        });
    };

    let snapshot = widget();
    let open = snapshot.is_open();

    rsx! {
        div { class: "chat-widget",
            button {
                id: "chat-button",
                class: "chat-button",
                r#type: "button",
                aria_label: "Toggle chat",
                aria_expanded: "{open}",
                onclick: move |_| {
                    widget.write().toggle_window();
                },
                "Chat"
            }
            div {
                id: "chat-window",
                class: window_class(open),
                aria_hidden: (!open).to_string(),
                div { class: "chat-header", "Health Assistant" }
                ChatMessages { messages: snapshot.messages().to_vec() }
                form {
                    id: "chat-form",
                    class: "chat-form",
                    onsubmit: move |ev: FormEvent| {
                        ev.prevent_default();
                        send_message();
                    },
                    input {
                        id: "chat-input",
                        r#type: "text",
                        placeholder: "Ask about symptoms or precautions...",
                        autocomplete: "off",
                        value: "{snapshot.input()}",
                        oninput: move |ev| widget.write().set_input(ev.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: snapshot.is_sending(),
                        "Send"
                    }
                }
            }
        }
    }
}

/// The conversation, oldest first.
#[component]
pub fn ChatMessages(messages: Vec<ChatMessage>) -> Element {
    rsx! {
        div { id: "chat-messages", class: "chat-messages",
            for (i, message) in messages.iter().enumerate() {
                div {
                    key: "{i}",
                    class: message_class(message.sender),
                    "{message.text}"
                }
            }
        }
    }
}
