//! Chat widget logic
//!
//! - `client` - transport seam and the HTTP client for `POST /chat`
//! - `widget` - open/closed state, the draft, and the rendered conversation
//!
//! # Usage
//!
//! ```rust,no_run
//! use cardio_widgets::chat::{ChatWidget, HttpChatClient};
//!
//! # async fn example() {
//! let client = HttpChatClient::new("http://127.0.0.1:5000/chat");
//! let mut widget = ChatWidget::default();
//! widget.set_input("What are the symptoms?");
//! widget.submit(&client).await;
//! # }
//! ```

mod client;
mod widget;

pub use client::{ChatTransport, HttpChatClient};
pub use widget::{ChatWidget, PendingSend};
