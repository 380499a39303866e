//! Theme toggle and chat widget for the heart health site.
//!
//! No renderer is enabled by default, so `cargo test` builds without a
//! webview toolkit. Pick one to run the app:
//!
//! ```text
//! dx serve --features web        # browser (wasm32)
//! cargo run --features desktop   # native webview
//! dx serve --features mobile     # iOS / Android
//! ```
//!
//! A build without one of these features compiles but cannot launch.

pub mod chat;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;

pub use error::{WidgetError, WidgetResult};
