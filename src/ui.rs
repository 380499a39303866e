use crate::config::config;
use crate::types::ThemeMode;
use crate::views::{ChatWidgetView, ThemeToggle, use_saved_theme};
use dioxus::prelude::*;

const WIDGET_CSS: Asset = asset!("/assets/widget.css");

/// Root component. Mounted once by the host; every listener it installs is
/// owned by its scope and released when it unmounts.
#[component]
pub fn App() -> Element {
    let theme = use_signal(|| ThemeMode::Light);
    let chat_enabled = config().widget_enabled;

    use_saved_theme(theme);

    rsx! {
        document::Link { rel: "stylesheet", href: WIDGET_CSS }
        AppHeader { theme }
        if chat_enabled {
            ChatWidgetView {}
        }
    }
}

#[component]
fn AppHeader(theme: Signal<ThemeMode>) -> Element {
    rsx! {
        div { class: "header no-divider",
            div { class: "header-content",
                h1 { class: "header-title", "Heart Health" }
                ThemeToggle { theme }
            }
        }
    }
}
