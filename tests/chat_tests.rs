//! Integration tests for the chat widget
//!
//! Runs the widget against a mock `/chat` endpoint

use async_trait::async_trait;
use cardio_widgets::WidgetResult;
use cardio_widgets::chat::{ChatTransport, ChatWidget, HttpChatClient};
use cardio_widgets::config::DEFAULT_FALLBACK_MESSAGE;
use cardio_widgets::types::{ChatMessage, Sender};
use serde_json::json;
use std::cell::Cell;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpChatClient {
    HttpChatClient::new(format!("{}/chat", server.uri()))
}

/// Client pointed at a port nothing listens on.
fn unreachable_client() -> HttpChatClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    HttpChatClient::new(format!("http://127.0.0.1:{}/chat", port))
}

/// Counts calls without touching the network.
#[derive(Default)]
struct CountingTransport {
    calls: Cell<usize>,
}

#[async_trait(?Send)]
impl ChatTransport for CountingTransport {
    async fn send(&self, message: &str) -> WidgetResult<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("echo: {}", message))
    }
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_posts_message_and_renders_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "message": "hello" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "Hi there" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut widget = ChatWidget::default();
        widget.set_input("hello");
        assert!(widget.submit(&client_for(&server)).await);

        assert_eq!(widget.input(), "");
        assert_eq!(
            widget.messages(),
            &[ChatMessage::user("hello"), ChatMessage::bot("Hi there")]
        );
        assert!(!widget.is_sending());
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({ "message": "precautions" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "Exercise." })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut widget = ChatWidget::default();
        widget.set_input("  precautions \n");
        widget.submit(&client_for(&server)).await;
        assert_eq!(widget.messages()[0].text, "precautions");
    }

    #[tokio::test]
    async fn test_blank_input_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut widget = ChatWidget::default();
        for draft in ["", "   ", "\t\n"] {
            widget.set_input(draft);
            assert!(!widget.submit(&client_for(&server)).await);
        }
        assert!(widget.messages().is_empty());
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_transport() {
        let transport = CountingTransport::default();
        let mut widget = ChatWidget::default();
        widget.set_input("  ");
        widget.submit(&transport).await;
        assert_eq!(transport.calls.get(), 0);

        widget.set_input("hi");
        widget.submit(&transport).await;
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(widget.messages().last().unwrap().text, "echo: hi");
    }

    #[tokio::test]
    async fn test_error_status_with_reply_is_rendered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "response": "Try later" })),
            )
            .mount(&server)
            .await;

        let mut widget = ChatWidget::default();
        widget.set_input("hello");
        widget.submit(&client_for(&server)).await;
        assert_eq!(widget.messages().last().unwrap().text, "Try later");
    }
}

mod failure_tests {
    use super::*;

    fn assert_single_fallback(widget: &ChatWidget) {
        let bot: Vec<_> = widget
            .messages()
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .collect();
        assert_eq!(bot.len(), 1);
        assert_eq!(bot[0].text, DEFAULT_FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_server_renders_fallback() {
        let client = unreachable_client();

        let mut widget = ChatWidget::default();
        widget.set_input("hello");
        assert!(widget.submit(&client).await);
        assert_single_fallback(&widget);
        assert!(!widget.is_sending());
    }

    #[tokio::test]
    async fn test_non_json_reply_renders_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let mut widget = ChatWidget::default();
        widget.set_input("hello");
        widget.submit(&client_for(&server)).await;
        assert_single_fallback(&widget);
    }

    #[tokio::test]
    async fn test_missing_response_field_renders_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "error": "no model" })),
            )
            .mount(&server)
            .await;

        let mut widget = ChatWidget::default();
        widget.set_input("hello");
        widget.submit(&client_for(&server)).await;
        assert_single_fallback(&widget);
    }

    #[tokio::test]
    async fn test_custom_fallback_text() {
        let client = unreachable_client();

        let mut widget = ChatWidget::new("Sorry, something went wrong.");
        widget.set_input("hello");
        widget.submit(&client).await;
        assert_eq!(
            widget.messages().last().unwrap().text,
            "Sorry, something went wrong."
        );
    }
}

mod window_tests {
    use super::*;

    #[test]
    fn test_odd_clicks_open_even_clicks_close() {
        let mut widget = ChatWidget::default();
        let initial = widget.is_open();

        for _ in 0..3 {
            widget.toggle_window();
        }
        assert_eq!(widget.is_open(), !initial);

        widget.toggle_window();
        assert_eq!(widget.is_open(), initial);
    }

    #[test]
    fn test_toggle_keeps_conversation() {
        let mut widget = ChatWidget::default();
        widget.toggle_window();
        widget.set_input("hello");
        let pending = widget.begin_send().unwrap();
        widget.finish_send(&pending, Ok("hi".to_string()));
        widget.toggle_window();
        widget.toggle_window();
        assert_eq!(widget.messages().len(), 2);
    }
}
