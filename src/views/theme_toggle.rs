use crate::storage::LocalPreferences;
use crate::theme::{BodyClasses, ThemeManager};
use crate::types::ThemeMode;
use dioxus::prelude::*;
use std::rc::Rc;

/// Apply the saved preference once the page has mounted.
pub fn use_saved_theme(theme: Signal<ThemeMode>) {
    let mut theme = theme;
    use_effect(move || {
        let manager = ThemeManager::new(LocalPreferences::new());
        theme.set(manager.load(&mut BodyClasses));
    });
}

#[component]
pub fn ThemeToggle(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    // One manager per mount so an unsaved choice carries across clicks.
    let manager = use_hook(|| Rc::new(ThemeManager::new(LocalPreferences::new())));
    let label = match theme() {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };
    rsx! {
        button {
            id: "theme-toggle",
            class: "btn btn-ghost theme-toggle",
            r#type: "button",
            onclick: move |_| {
                theme.set(manager.toggle_theme(&mut BodyClasses));
            },
            "{label}"
        }
    }
}
