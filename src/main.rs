use cardio_widgets::config::config;
use cardio_widgets::logging::init_tracing;

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

// Browser builds read the bundled file directly in `WidgetConfig::from_env`.
#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn load_bundled_config() {
    use cardio_widgets::config::{BUNDLED_CONFIG, parse_env_file};

    for (key, value) in parse_env_file(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

fn main() {
    load_dotenv();
    init_tracing(config().log_level);
    dioxus::launch(cardio_widgets::ui::App);
}
