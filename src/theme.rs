use crate::storage::PreferenceStore;
use crate::types::ThemeMode;
use std::cell::Cell;
use std::collections::BTreeSet;

pub const THEME_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Something that carries CSS classes, normally `<body>`.
pub trait ClassList {
    fn add(&mut self, class: &str);
    fn remove(&mut self, class: &str);
}

/// Detached class set, used where there is no live document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ClassList for ClassSet {
    fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }
}

/// The live document body.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyClasses;

#[cfg(target_arch = "wasm32")]
impl BodyClasses {
    fn class_list() -> Option<web_sys::DomTokenList> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.class_list())
    }
}

#[cfg(target_arch = "wasm32")]
impl ClassList for BodyClasses {
    fn add(&mut self, class: &str) {
        if let Some(list) = Self::class_list() {
            let _ = list.add_1(class);
        }
    }

    fn remove(&mut self, class: &str) {
        if let Some(list) = Self::class_list() {
            let _ = list.remove_1(class);
        }
    }
}

// Webview renderers have no direct DOM handle; go through the document bridge.
#[cfg(not(target_arch = "wasm32"))]
impl ClassList for BodyClasses {
    fn add(&mut self, class: &str) {
        let _ = dioxus::prelude::document::eval(&format!(
            "document.body.classList.add({});",
            js_string(class)
        ));
    }

    fn remove(&mut self, class: &str) {
        let _ = dioxus::prelude::document::eval(&format!(
            "document.body.classList.remove({});",
            js_string(class)
        ));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

pub fn apply_theme(target: &mut impl ClassList, theme: ThemeMode) {
    match theme {
        ThemeMode::Dark => target.add(DARK_MODE_CLASS),
        ThemeMode::Light => target.remove(DARK_MODE_CLASS),
    }
}

/// Reads, toggles and applies the persisted theme preference.
///
/// A choice that could not be persisted is kept for the rest of the
/// session and takes precedence over the store.
#[derive(Clone, Debug)]
pub struct ThemeManager<S> {
    store: S,
    unsaved: Cell<Option<ThemeMode>>,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            unsaved: Cell::new(None),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn saved_theme(&self) -> ThemeMode {
        match self.unsaved.get() {
            Some(theme) => theme,
            None => ThemeMode::from_stored(self.store.get(THEME_KEY).as_deref()),
        }
    }

    /// Page-load hook: apply whatever was last chosen.
    pub fn load(&self, target: &mut impl ClassList) -> ThemeMode {
        let theme = self.saved_theme();
        tracing::debug!(theme = theme.as_str(), "applying saved theme");
        apply_theme(target, theme);
        theme
    }

    pub fn toggle_theme(&self, target: &mut impl ClassList) -> ThemeMode {
        let next = match self.unsaved.get() {
            Some(theme) => theme.toggled(),
            None => ThemeMode::toggled_from(self.store.get(THEME_KEY).as_deref()),
        };
        match self.store.set(THEME_KEY, next.as_str()) {
            Ok(()) => self.unsaved.set(None),
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist theme preference");
                self.unsaved.set(Some(next));
            }
        }
        apply_theme(target, next);
        next
    }
}
